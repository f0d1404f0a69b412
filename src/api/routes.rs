//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_handler, delete_handler, flush_handler, health_handler, keys_handler, lookup_handler,
    update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /cache/:key` - Read a value, admitting a generated one on miss
/// - `GET /keys` - List keys of live entries
/// - `POST /cache` - Cache a payload under a generated key
/// - `PATCH /cache/:key` - Replace a payload and refresh its TTL
/// - `DELETE /cache/:key` - Delete an entry
/// - `DELETE /cache` - Delete all entries
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/cache", post(create_handler).delete(flush_handler))
        .route(
            "/cache/:key",
            get(lookup_handler)
                .patch(update_handler)
                .delete(delete_handler),
        )
        .route("/keys", get(keys_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
