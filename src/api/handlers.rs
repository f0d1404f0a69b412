//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::CacheEngine;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    CreateRequest, DeleteResponse, FlushResponse, HealthResponse, KeysResponse, LookupResponse,
    RecordResponse, UpdateRequest, UpdateResponse,
};
use crate::store::MemoryStore;

/// Application state shared across all handlers.
///
/// The engine is stateless between calls, so plain `Arc` sharing suffices;
/// all mutable state lives behind the entry store's own synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache engine
    pub engine: Arc<CacheEngine>,
}

impl AppState {
    /// Creates a new AppState around the given engine.
    pub fn new(engine: CacheEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires an in-memory entry store into a fresh engine.
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(CacheEngine::new(store, config.cache_config()))
    }
}

/// Handler for GET /cache/:key
///
/// Reads the value under the key, admitting a freshly generated one on miss.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<LookupResponse>> {
    let lookup = state.engine.get_or_create(&key)?;
    Ok(Json(LookupResponse::new(key, lookup)))
}

/// Handler for GET /keys
///
/// Lists the keys of all currently live entries.
pub async fn keys_handler(State(state): State<AppState>) -> Result<Json<KeysResponse>> {
    let keys = state.engine.list_keys()?;
    Ok(Json(KeysResponse::new(keys)))
}

/// Handler for POST /cache
///
/// Caches the request payload under a server-generated key.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateRequest>,
) -> Result<Json<RecordResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::Validation(error_msg));
    }

    let record = state.engine.create(req.data)?;
    Ok(Json(RecordResponse::created(record)))
}

/// Handler for PATCH /cache/:key
///
/// Replaces the payload under the key and refreshes its TTL.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<UpdateResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::Validation(error_msg));
    }

    let record = state.engine.update(&key, req.data)?;
    Ok(Json(UpdateResponse::new(record)))
}

/// Handler for DELETE /cache/:key
///
/// Deletes the entry under the key regardless of liveness.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.engine.delete_by_key(&key)?;
    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for DELETE /cache
///
/// Deletes every entry.
pub async fn flush_handler(State(state): State<AppState>) -> Result<Json<FlushResponse>> {
    state.engine.delete_all()?;
    Ok(Json(FlushResponse::new()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
