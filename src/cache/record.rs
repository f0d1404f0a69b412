//! Cache Records
//!
//! The engine-level view of a stored entry and the result of a read.

use serde::Serialize;
use serde_json::Value;

use crate::store::StoredEntry;

// == Cache Record ==
/// A cache entry as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheRecord {
    /// The key the record is stored under
    pub key: String,
    /// The opaque payload
    pub value: Value,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheRecord {
    /// Creates a new record.
    pub fn new(key: impl Into<String>, value: Value, expires_at: u64) -> Self {
        Self {
            key: key.into(),
            value,
            expires_at,
        }
    }
}

impl From<CacheRecord> for StoredEntry {
    fn from(record: CacheRecord) -> Self {
        Self {
            key: record.key,
            value: record.value,
            expires_at: record.expires_at,
        }
    }
}

impl From<StoredEntry> for CacheRecord {
    fn from(entry: StoredEntry) -> Self {
        Self {
            key: entry.key,
            value: entry.value,
            expires_at: entry.expires_at,
        }
    }
}

// == Lookup ==
/// Result of a `get_or_create` read.
#[derive(Debug, Clone, Serialize)]
pub struct Lookup {
    /// The stored (or freshly admitted) value
    pub value: Value,
    /// Whether a live entry for the requested key was found
    pub hit: bool,
}
