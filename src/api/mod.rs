//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `GET /cache/:key` - Read a value, admitting a generated one on miss
//! - `GET /keys` - List keys of live entries
//! - `POST /cache` - Cache a payload under a generated key
//! - `PATCH /cache/:key` - Replace a payload and refresh its TTL
//! - `DELETE /cache/:key` - Delete an entry
//! - `DELETE /cache` - Delete all entries
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
