//! Owns the client, the transport, and the entity state.
//!
//! # Design
//! `FileStore` is the single place where requests are dispatched and their
//! completions applied to `FileState`. Each method is one synchronous
//! pending/execute/settle sequence, so transitions land in dispatch order.
//! Every mutation's completion explicitly re-fetches the list (command then
//! invalidate) — the list view always reflects backend-authoritative state
//! rather than an optimistic guess. The re-fetch carries no sort instruction,
//! so the refreshed list arrives in backend order until the list view next
//! re-issues its own sorted fetch.

use chrono::Utc;

use crate::client::FileClient;
use crate::error::ApiError;
use crate::http::{Transport, UreqTransport};
use crate::sort::SortInstruction;
use crate::state::{Event, FileState};
use crate::types::{File, FilePatch, NewFile};

pub struct FileStore<T: Transport> {
    client: FileClient,
    transport: T,
    state: FileState,
}

impl FileStore<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl<T: Transport> FileStore<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: FileClient::new(base_url),
            transport,
            state: FileState::new(),
        }
    }

    pub fn state(&self) -> &FileState {
        &self.state
    }

    pub fn fetch_list(&mut self, sort: Option<SortInstruction>) {
        tracing::debug!(?sort, "request to list files");
        self.state.apply(Event::FetchStarted);
        let request = self.client.build_list_files(sort.as_ref(), cache_buster());
        let result = self
            .transport
            .execute(request)
            .and_then(|resp| self.client.parse_list_files(resp));
        match result {
            Ok(files) => self.state.apply(Event::ListFetched { files, sort }),
            Err(e) => self.state.apply(Event::Failed(e.to_string())),
        }
    }

    pub fn fetch_one(&mut self, id: i64) {
        tracing::debug!(id, "request to get file");
        self.state.apply(Event::FetchStarted);
        let request = self.client.build_get_file(id);
        let result = self
            .transport
            .execute(request)
            .and_then(|resp| self.client.parse_get_file(resp));
        match result {
            Ok(file) => self.state.apply(Event::EntityFetched(file)),
            Err(e) => self.state.apply(Event::Failed(e.to_string())),
        }
    }

    pub fn create(&mut self, input: &NewFile) {
        tracing::debug!("request to create file");
        self.state.apply(Event::MutationStarted);
        let result = self
            .client
            .build_create_file(input)
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| self.client.parse_create_file(resp));
        self.settle_mutation(result.map(Event::Saved));
    }

    pub fn update(&mut self, id: i64, file: &File) {
        tracing::debug!(id, "request to update file");
        self.state.apply(Event::MutationStarted);
        let result = self
            .client
            .build_update_file(id, file)
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| self.client.parse_update_file(resp));
        self.settle_mutation(result.map(Event::Saved));
    }

    pub fn partial_update(&mut self, id: i64, patch: &FilePatch) {
        tracing::debug!(id, "request to partially update file");
        self.state.apply(Event::MutationStarted);
        let result = self
            .client
            .build_partial_update_file(id, patch)
            .and_then(|req| self.transport.execute(req))
            .and_then(|resp| self.client.parse_update_file(resp));
        self.settle_mutation(result.map(Event::Saved));
    }

    pub fn delete(&mut self, id: i64) {
        tracing::debug!(id, "request to delete file");
        self.state.apply(Event::MutationStarted);
        let request = self.client.build_delete_file(id);
        let result = self
            .transport
            .execute(request)
            .and_then(|resp| self.client.parse_delete_file(resp));
        self.settle_mutation(result.map(|()| Event::Deleted));
    }

    pub fn reset(&mut self) {
        self.state.apply(Event::Reset);
    }

    /// Finish a mutation: on success, re-fetch the list first and apply the
    /// settling event last, so `update_success` survives the re-fetch's
    /// `FetchStarted` clearing it. On failure nothing is invalidated and the
    /// initiating view keeps its form open.
    fn settle_mutation(&mut self, result: Result<Event, ApiError>) {
        match result {
            Ok(event) => {
                self.fetch_list(None);
                self.state.apply(event);
            }
            Err(e) => self.state.apply(Event::Failed(e.to_string())),
        }
    }
}

fn cache_buster() -> i64 {
    Utc::now().timestamp_millis()
}
