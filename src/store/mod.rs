//! Entry Store Module
//!
//! Defines the storage contract the cache engine is built on, plus the
//! in-memory implementation used by the server.
//!
//! Each trait method is a single store-level operation. Callers compose them
//! freely; no atomicity is provided across calls.

mod memory;

pub use memory::MemoryStore;

use std::fmt;

use serde_json::Value;
use thiserror::Error;

// == Stored Entry ==
/// A single persisted cache record as the store sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntry {
    /// Unique key, enforced on insert
    pub key: String,
    /// Opaque payload owned by the cache engine
    pub value: Value,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

// == Entry Filter ==
/// Selects the entry a conditional update applies to.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    /// Exact key to match
    pub key: String,
    /// When set, additionally require `expires_at >= live_at`
    pub live_at: Option<u64>,
}

impl EntryFilter {
    /// Matches the entry under `key` only while it is live at `now`.
    pub fn live(key: &str, now: u64) -> Self {
        Self {
            key: key.to_string(),
            live_at: Some(now),
        }
    }

    /// Matches the entry under `key` regardless of liveness.
    pub fn by_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            live_at: None,
        }
    }
}

// == Entry Change ==
/// Fields written by a conditional update.
#[derive(Debug, Clone)]
pub struct EntryChange {
    /// Replacement value; `None` leaves the stored value untouched
    pub value: Option<Value>,
    /// New expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl EntryChange {
    /// Refreshes the expiration only, value untouched.
    pub fn touch(expires_at: u64) -> Self {
        Self {
            value: None,
            expires_at,
        }
    }

    /// Replaces the value and refreshes the expiration.
    pub fn replace(value: Value, expires_at: u64) -> Self {
        Self {
            value: Some(value),
            expires_at,
        }
    }
}

// == Store Error ==
/// Errors surfaced by a store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Insert violated the key uniqueness constraint
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// Any other backend failure
    #[error("store backend failure: {0}")]
    Backend(String),
}

// == Entry Store Trait ==
/// Storage contract required of any backing store.
pub trait EntryStore: fmt::Debug + Send + Sync {
    /// Point lookup: the entry under `key` that is live at `now`.
    fn find_live(&self, key: &str, now: u64) -> Result<Option<StoredEntry>, StoreError>;

    /// Point lookup by key regardless of liveness.
    fn find_by_key(&self, key: &str) -> Result<Option<StoredEntry>, StoreError>;

    /// First entry already expired at `now`, in store-native order.
    fn find_expired(&self, now: u64) -> Result<Option<StoredEntry>, StoreError>;

    /// Inserts a new entry, enforcing key uniqueness.
    fn insert(&self, entry: StoredEntry) -> Result<(), StoreError>;

    /// Applies `change` to the entry matching `filter`.
    ///
    /// Returns the number of entries affected (0 or 1, keys being unique).
    fn update_entry(&self, filter: &EntryFilter, change: &EntryChange) -> Result<u64, StoreError>;

    /// Removes the entry under `key` regardless of liveness.
    ///
    /// Returns whether an entry was removed.
    fn delete_by_key(&self, key: &str) -> Result<bool, StoreError>;

    /// Removes every entry.
    fn delete_all(&self) -> Result<(), StoreError>;

    /// Total number of entries, live and expired.
    fn count(&self) -> Result<usize, StoreError>;

    /// Distinct keys of entries live at `now`.
    fn live_keys(&self, now: u64) -> Result<Vec<String>, StoreError>;
}
