//! Stateless HTTP request builder and response parser for the file API.
//!
//! # Design
//! `FileClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! A `Transport` executes the actual round-trip in between, keeping request
//! building and response parsing deterministic and free of I/O.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::sort::SortInstruction;
use crate::types::{File, FilePatch, NewFile};

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Synchronous, stateless client for the `/api/files` resource.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct FileClient {
    base_url: String,
}

impl FileClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List request. `cache_buster` is the caller's current epoch-millisecond
    /// timestamp, appended so intermediaries never serve a stale list.
    pub fn build_list_files(
        &self,
        sort: Option<&SortInstruction>,
        cache_buster: i64,
    ) -> HttpRequest {
        let query = match sort {
            Some(sort) => format!("sort={sort}&cacheBuster={cache_buster}"),
            None => format!("cacheBuster={cache_buster}"),
        };
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/files?{query}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_file(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/files/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_file(&self, input: &NewFile) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/files", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    /// Full replace. The backend insists the body id matches the path id, so
    /// the builder stamps `id` into the payload.
    pub fn build_update_file(&self, id: i64, input: &File) -> Result<HttpRequest, ApiError> {
        let payload = File {
            id: Some(id),
            ..input.clone()
        };
        let body =
            serde_json::to_string(&payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/api/files/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    /// Merge-patch: only the fields present in `input` are applied.
    pub fn build_partial_update_file(
        &self,
        id: i64,
        input: &FilePatch,
    ) -> Result<HttpRequest, ApiError> {
        let payload = FilePatch {
            id: Some(id),
            ..input.clone()
        };
        let body =
            serde_json::to_string(&payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/api/files/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_file(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/api/files/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_files(&self, response: HttpResponse) -> Result<Vec<File>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_file(&self, response: HttpResponse) -> Result<File, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_file(&self, response: HttpResponse) -> Result<File, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_file(&self, response: HttpResponse) -> Result<File, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_delete_file(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
