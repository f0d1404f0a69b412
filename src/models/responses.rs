//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheRecord, Lookup};

/// Response body for the lookup operation (GET /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    /// The requested key
    pub key: String,
    /// The stored (or freshly admitted) value
    pub value: Value,
    /// Whether a live entry was found for the key
    pub hit: bool,
    /// "Cache hit" or "Cache miss"
    pub message: String,
}

impl LookupResponse {
    /// Creates a LookupResponse from an engine lookup result.
    pub fn new(key: impl Into<String>, lookup: Lookup) -> Self {
        let message = if lookup.hit { "Cache hit" } else { "Cache miss" };
        Self {
            key: key.into(),
            value: lookup.value,
            hit: lookup.hit,
            message: message.to_string(),
        }
    }
}

/// Response body for the keys listing (GET /keys)
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    /// Keys of all currently live entries
    pub keys: Vec<String>,
    /// Success message
    pub message: String,
}

impl KeysResponse {
    /// Creates a new KeysResponse
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            keys,
            message: "All keys fetched".to_string(),
        }
    }
}

/// Response body for the create operation (POST /cache)
#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    /// Success message
    pub message: String,
    /// The stored record; at capacity this reflects the takeover victim
    pub record: CacheRecord,
}

impl RecordResponse {
    /// Creates a new RecordResponse
    pub fn created(record: CacheRecord) -> Self {
        Self {
            message: "Data cached successfully".to_string(),
            record,
        }
    }
}

/// Response body for the update operation (PATCH /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    /// Success message
    pub message: String,
    /// The updated record, or null when an expired entry absorbed no update
    pub record: Option<CacheRecord>,
}

impl UpdateResponse {
    /// Creates a new UpdateResponse
    pub fn new(record: Option<CacheRecord>) -> Self {
        Self {
            message: "Data updated successfully".to_string(),
            record,
        }
    }
}

/// Response body for the delete operation (DELETE /cache/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Cache for key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for the flush operation (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct FlushResponse {
    /// Success message
    pub message: String,
}

impl FlushResponse {
    /// Creates a new FlushResponse
    pub fn new() -> Self {
        Self {
            message: "Cache deleted successfully".to_string(),
        }
    }
}

impl Default for FlushResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
