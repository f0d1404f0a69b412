//! Error types for the cache server
//!
//! Provides unified error handling using thiserror. The closed set of error
//! kinds is matched exhaustively where errors become HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

// == Cache Error Enum ==
/// Unified error type for the cache server.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Malformed input rejected before reaching the store
    #[error("Invalid request: {0}")]
    Validation(String),

    /// No entry exists for the requested key
    #[error("No entry found for key: {0}")]
    NotFound(String),

    /// Store at capacity with no expired entry available for takeover
    #[error("Cache limit exceeded: no expired entry available")]
    LimitExceeded,

    /// Failure surfaced by the entry store, propagated unchanged
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::Validation(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::LimitExceeded => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (
                CacheError::Validation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CacheError::NotFound("key".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (CacheError::LimitExceeded, StatusCode::SERVICE_UNAVAILABLE),
            (
                CacheError::Store(StoreError::Backend("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_duplicate_key_maps_to_store_error() {
        // A key-generation collision surfaces as a store error, not a
        // distinguishable application error
        let error: CacheError = StoreError::DuplicateKey("abc1234".to_string()).into();
        assert!(matches!(error, CacheError::Store(_)));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
