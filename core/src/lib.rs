//! Synchronous client core for the file service's `/api/files` resource.
//!
//! # Overview
//! The CRUD module behind the file list/detail/edit pages: a stateless REST
//! client, an entity state container with one named transition per request
//! lifecycle event, a store that sequences dispatch/execute/settle, and the
//! page view models.
//!
//! # Design
//! - `FileClient` is stateless — it holds only `base_url`. Each CRUD
//!   operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response); the `Transport` in between is the only I/O.
//! - `FileState` is owned by the store and mutated exclusively through
//!   `apply`, so concurrent requests settle as a serialized sequence of
//!   transitions.
//! - Every mutation re-fetches the list on completion; the list view shows
//!   backend-authoritative state, never an optimistic guess.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod sort;
pub mod state;
pub mod store;
pub mod types;
pub mod view;

pub use client::FileClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use sort::{SortDirection, SortField, SortInstruction};
pub use state::{Event, FileState};
pub use store::FileStore;
pub use types::{File, FilePatch, NewFile};
