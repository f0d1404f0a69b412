//! Cache Module
//!
//! The cache engine core: TTL policy, key generation, and the capacity /
//! takeover logic built on the entry store.

mod engine;
mod keygen;
mod record;
mod ttl;


// Re-export public types
pub use engine::{CacheConfig, CacheEngine};
pub use record::{CacheRecord, Lookup};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
