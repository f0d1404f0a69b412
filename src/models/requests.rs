//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Request body for the create operation (POST /cache)
///
/// # Fields
/// - `data`: The opaque payload to cache; the key is generated server-side
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
    /// The payload to cache
    #[serde(default)]
    pub data: Value,
}

impl CreateRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.data.is_null() {
            return Some("Field 'data' is required".to_string());
        }
        None
    }
}

/// Request body for the update operation (PATCH /cache/:key)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    /// The replacement payload
    #[serde(default)]
    pub data: Value,
}

impl UpdateRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.data.is_null() {
            return Some("Field 'data' is required".to_string());
        }
        None
    }
}
