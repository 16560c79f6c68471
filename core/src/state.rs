//! Entity state container for the file list and detail views.
//!
//! # Design
//! A single `FileState` value holds the last-fetched list, the currently
//! loaded detail entity, and the request status flags. It is owned by the
//! store and mutated exclusively through `apply`, one named transition per
//! request lifecycle event — views read it, they never write it. Applying
//! events in completion order is what makes concurrent requests safe here:
//! each transition runs to completion before the next one starts.

use crate::sort::SortInstruction;
use crate::types::File;

/// Request lifecycle events. Each variant is one deterministic transition of
/// `FileState`.
#[derive(Debug, Clone)]
pub enum Event {
    /// A list or detail read was dispatched.
    FetchStarted,
    /// A create/update/partial-update/delete was dispatched.
    MutationStarted,
    /// A list fetch completed; `sort` is the instruction that was attached
    /// to the originating request.
    ListFetched {
        files: Vec<File>,
        sort: Option<SortInstruction>,
    },
    /// A detail fetch completed.
    EntityFetched(File),
    /// A create, full update, or partial update completed; the payload is
    /// the backend's authoritative version of the entity.
    Saved(File),
    /// A delete completed.
    Deleted,
    /// Any operation failed; the message is the serialized error.
    Failed(String),
    /// Restore all fields to their initial values.
    Reset,
}

/// Holds the last-known list/detail/status for the file entity.
#[derive(Debug, Clone, Default)]
pub struct FileState {
    /// Last-fetched list, client-side sorted.
    pub entities: Vec<File>,
    /// The single file currently loaded for detail/edit.
    pub entity: Option<File>,
    /// A read is in flight.
    pub loading: bool,
    /// A write is in flight.
    pub updating: bool,
    /// The most recent write completed successfully.
    pub update_success: bool,
    /// Message of the last error, cleared when a new request starts.
    pub error_message: Option<String>,
}

impl FileState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one request lifecycle event.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::FetchStarted => {
                self.error_message = None;
                self.update_success = false;
                self.loading = true;
            }
            Event::MutationStarted => {
                self.error_message = None;
                self.update_success = false;
                self.updating = true;
            }
            Event::ListFetched { mut files, sort } => {
                // No instruction means backend order stands; sorting with a
                // vacuous comparator is not order-preserving here, so skip
                // the sort entirely instead.
                if let Some(sort) = sort {
                    files.sort_by(|a, b| sort.compare(a, b));
                }
                self.entities = files;
                self.loading = false;
            }
            Event::EntityFetched(file) => {
                self.entity = Some(file);
                self.loading = false;
            }
            Event::Saved(file) => {
                self.entity = Some(file);
                self.updating = false;
                self.loading = false;
                self.update_success = true;
            }
            Event::Deleted => {
                self.entity = None;
                self.updating = false;
                self.update_success = true;
            }
            Event::Failed(message) => {
                self.error_message = Some(message);
                self.loading = false;
                self.updating = false;
            }
            Event::Reset => *self = Self::default(),
        }
    }
}
