//! Slotcache - a capacity-bounded cache server
//!
//! Entries expire after an idle TTL; at capacity, new data is admitted by
//! taking over expired slots instead of growing the store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use cache::{CacheConfig, CacheEngine};
pub use config::Config;
