//! Error types for the file API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the record does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging. The state container stores failures as plain
//! messages, so every variant renders to a single line via `Display`.

use thiserror::Error;

/// Errors returned by `FileClient` parse methods and the transport layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested file does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced an HTTP response (DNS, refused connection,
    /// broken pipe).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
