//! In-Memory Entry Store
//!
//! Backs the server with a mutex-guarded, insertion-ordered collection.
//! "First match" in this store means oldest-inserted first.

use std::sync::{Mutex, MutexGuard};

use super::{EntryChange, EntryFilter, EntryStore, StoreError, StoredEntry};

// == Memory Store ==
/// Insertion-ordered in-memory store implementing [`EntryStore`].
///
/// Every trait call acquires the lock independently; nothing is held across
/// calls, so multi-step engine flows interleave freely.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<StoredEntry>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<MutexGuard<'_, Vec<StoredEntry>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Backend("entry store mutex poisoned".to_string()))
    }
}

fn matches(entry: &StoredEntry, filter: &EntryFilter) -> bool {
    entry.key == filter.key && filter.live_at.map_or(true, |now| entry.expires_at >= now)
}

impl EntryStore for MemoryStore {
    fn find_live(&self, key: &str, now: u64) -> Result<Option<StoredEntry>, StoreError> {
        let entries = self.guard()?;
        Ok(entries
            .iter()
            .find(|e| e.key == key && e.expires_at >= now)
            .cloned())
    }

    fn find_by_key(&self, key: &str) -> Result<Option<StoredEntry>, StoreError> {
        let entries = self.guard()?;
        Ok(entries.iter().find(|e| e.key == key).cloned())
    }

    fn find_expired(&self, now: u64) -> Result<Option<StoredEntry>, StoreError> {
        let entries = self.guard()?;
        Ok(entries.iter().find(|e| e.expires_at < now).cloned())
    }

    fn insert(&self, entry: StoredEntry) -> Result<(), StoreError> {
        let mut entries = self.guard()?;
        if entries.iter().any(|e| e.key == entry.key) {
            return Err(StoreError::DuplicateKey(entry.key));
        }
        entries.push(entry);
        Ok(())
    }

    fn update_entry(&self, filter: &EntryFilter, change: &EntryChange) -> Result<u64, StoreError> {
        let mut entries = self.guard()?;
        let mut affected = 0;
        if let Some(entry) = entries.iter_mut().find(|e| matches(e, filter)) {
            if let Some(value) = &change.value {
                entry.value = value.clone();
            }
            entry.expires_at = change.expires_at;
            affected = 1;
        }
        Ok(affected)
    }

    fn delete_by_key(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self.guard()?;
        match entries.iter().position(|e| e.key == key) {
            Some(idx) => {
                entries.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_all(&self) -> Result<(), StoreError> {
        self.guard()?.clear();
        Ok(())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.guard()?.len())
    }

    fn live_keys(&self, now: u64) -> Result<Vec<String>, StoreError> {
        let entries = self.guard()?;
        // Keys are unique, so the live subset is already distinct.
        Ok(entries
            .iter()
            .filter(|e| e.expires_at >= now)
            .map(|e| e.key.clone())
            .collect())
    }
}
