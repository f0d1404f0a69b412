//! Request and Response models for the cache server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateRequest, UpdateRequest};
pub use responses::{
    DeleteResponse, FlushResponse, HealthResponse, KeysResponse, LookupResponse, RecordResponse,
    UpdateResponse,
};
