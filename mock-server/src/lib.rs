//! In-memory implementation of the `/api/files` resource.
//!
//! Stands in for the real backend during development and integration tests.
//! Identifiers are assigned from a monotone counter and records live in a
//! `BTreeMap`, so the list endpoint always returns files in id order — the
//! deterministic "backend order" the client's sort tests rely on. The `sort`
//! and `cacheBuster` query parameters are accepted and ignored: ordering is
//! the client's job.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub file_name: String,
    pub file_type: String,
    pub last_modified: NaiveDate,
    #[serde(default)]
    pub converted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_url: Option<String>,
    pub category: String,
}

/// Partial update payload; only the fields present are applied.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePatch {
    pub id: Option<i64>,
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub last_modified: Option<NaiveDate>,
    pub converted: Option<bool>,
    pub s3_url: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Default)]
pub struct Store {
    files: BTreeMap<i64, File>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

type Rejection = (StatusCode, &'static str);

pub fn app() -> Router {
    let db: Db = Db::default();
    Router::new()
        .route("/api/files", get(list_files).post(create_file))
        .route(
            "/api/files/{id}",
            get(get_file)
                .put(update_file)
                .patch(patch_file)
                .delete(delete_file),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_files(State(db): State<Db>) -> Json<Vec<File>> {
    tracing::debug!("request to get all files");
    let store = db.read().await;
    Json(store.files.values().cloned().collect())
}

async fn create_file(
    State(db): State<Db>,
    Json(mut input): Json<File>,
) -> Result<(StatusCode, Json<File>), Rejection> {
    tracing::debug!("request to create file");
    if input.id.is_some() {
        return Err((
            StatusCode::BAD_REQUEST,
            "A new file cannot already have an ID",
        ));
    }
    let mut store = db.write().await;
    store.next_id += 1;
    let id = store.next_id;
    input.id = Some(id);
    store.files.insert(id, input.clone());
    Ok((StatusCode::CREATED, Json(input)))
}

async fn get_file(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<File>, StatusCode> {
    tracing::debug!(id, "request to get file");
    let store = db.read().await;
    store
        .files
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_file(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<File>,
) -> Result<Json<File>, Rejection> {
    tracing::debug!(id, "request to update file");
    check_body_id(id, input.id)?;
    let mut store = db.write().await;
    let file = store
        .files
        .get_mut(&id)
        .ok_or((StatusCode::NOT_FOUND, "Entity not found"))?;
    *file = input;
    Ok(Json(file.clone()))
}

async fn patch_file(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<FilePatch>,
) -> Result<Json<File>, Rejection> {
    tracing::debug!(id, "request to partially update file");
    check_body_id(id, input.id)?;
    let mut store = db.write().await;
    let file = store
        .files
        .get_mut(&id)
        .ok_or((StatusCode::NOT_FOUND, "Entity not found"))?;
    if let Some(file_name) = input.file_name {
        file.file_name = file_name;
    }
    if let Some(file_type) = input.file_type {
        file.file_type = file_type;
    }
    if let Some(last_modified) = input.last_modified {
        file.last_modified = last_modified;
    }
    if let Some(converted) = input.converted {
        file.converted = converted;
    }
    if let Some(s3_url) = input.s3_url {
        file.s3_url = Some(s3_url);
    }
    if let Some(category) = input.category {
        file.category = category;
    }
    Ok(Json(file.clone()))
}

async fn delete_file(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    tracing::debug!(id, "request to delete file");
    let mut store = db.write().await;
    store
        .files
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

/// PUT/PATCH bodies must carry the path id.
fn check_body_id(path_id: i64, body_id: Option<i64>) -> Result<(), Rejection> {
    match body_id {
        None => Err((StatusCode::BAD_REQUEST, "Invalid id")),
        Some(body_id) if body_id != path_id => Err((StatusCode::BAD_REQUEST, "Invalid ID")),
        Some(_) => Ok(()),
    }
}
