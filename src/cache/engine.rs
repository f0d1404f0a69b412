//! Cache Engine
//!
//! The core read/write/eviction logic, composed entirely from [`EntryStore`]
//! primitives. The engine keeps no state between calls beyond its injected
//! configuration; all entry state lives in the store.
//!
//! Engine operations issue multiple independent store calls with no
//! cross-call atomicity. The count-then-insert admission check and the
//! takeover victim selection can therefore race under concurrent callers
//! (transient capacity overshoot, last-write-wins on a shared victim). The
//! capacity ceiling is exact for single-threaded admission.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::cache::keygen::random_token;
use crate::cache::record::{CacheRecord, Lookup};
use crate::cache::ttl::{current_timestamp_ms, expiration_from};
use crate::cache::MAX_KEY_LENGTH;
use crate::error::{CacheError, Result};
use crate::store::{EntryChange, EntryFilter, EntryStore};

// == Cache Config ==
/// Engine configuration, injected at construction.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Idle window in seconds before an untouched entry expires
    pub idle_ttl_secs: u64,
    /// Hard ceiling on resident entries, live or expired
    pub max_entries: usize,
}

// == Cache Engine ==
/// Capacity-bounded cache over an [`EntryStore`].
#[derive(Debug, Clone)]
pub struct CacheEngine {
    store: Arc<dyn EntryStore>,
    config: CacheConfig,
}

impl CacheEngine {
    // == Constructor ==
    /// Creates an engine over `store` with the given configuration.
    pub fn new(store: Arc<dyn EntryStore>, config: CacheConfig) -> Self {
        Self { store, config }
    }

    // == Get Or Create ==
    /// Reads the value under `key`, admitting a freshly generated one on miss.
    ///
    /// A live hit refreshes the entry's expiration in place and returns the
    /// stored value. A miss first removes any expired record still holding
    /// the key, then admits a new random value under it: inserted below
    /// capacity, or written over an expired slot at capacity. A takeover
    /// leaves the victim's own key on the record, so the requested key is
    /// not necessarily resolvable afterwards.
    pub fn get_or_create(&self, key: &str) -> Result<Lookup> {
        validate_key(key)?;
        let now = current_timestamp_ms();

        if let Some(entry) = self.store.find_live(key, now)? {
            self.store.update_entry(
                &EntryFilter::live(key, now),
                &EntryChange::touch(self.expiration(now)),
            )?;
            debug!("Cache hit for key '{}'", key);
            return Ok(Lookup {
                value: entry.value,
                hit: true,
            });
        }

        // An expired record may still hold this key; drop it so the key is
        // free for a fresh insert.
        self.store.delete_by_key(key)?;

        let value = Value::String(random_token());
        if self.store.count()? < self.config.max_entries {
            let record = CacheRecord::new(key, value.clone(), self.expiration(now));
            self.store.insert(record.into())?;
            debug!("Cache miss for key '{}', inserted", key);
            Ok(Lookup { value, hit: false })
        } else {
            let record = self.take_over_expired(value, now)?;
            debug!(
                "Cache miss for key '{}', took over expired slot '{}'",
                key, record.key
            );
            Ok(Lookup {
                value: record.value,
                hit: false,
            })
        }
    }

    // == Create ==
    /// Stores `payload` under a freshly generated key.
    ///
    /// At capacity the payload is admitted by takeover instead, and the
    /// returned record carries the victim's key rather than the generated one.
    pub fn create(&self, payload: Value) -> Result<CacheRecord> {
        validate_payload(&payload)?;
        let now = current_timestamp_ms();
        let key = random_token();

        if self.store.count()? < self.config.max_entries {
            let record = CacheRecord::new(key, payload, self.expiration(now));
            self.store.insert(record.clone().into())?;
            Ok(record)
        } else {
            // The generated key goes unused on this path.
            self.take_over_expired(payload, now)
        }
    }

    // == Update ==
    /// Replaces the value under `key`, refreshing its expiration.
    ///
    /// The update predicate is liveness-filtered: a record that exists but
    /// has already expired matches nothing, and the call returns `None`
    /// without reviving it or erroring. A key with no record at all gets a
    /// fresh insert. Capacity is not consulted.
    pub fn update(&self, key: &str, payload: Value) -> Result<Option<CacheRecord>> {
        validate_key(key)?;
        validate_payload(&payload)?;
        let now = current_timestamp_ms();
        let expires_at = self.expiration(now);

        if self.store.find_by_key(key)?.is_some() {
            let affected = self.store.update_entry(
                &EntryFilter::live(key, now),
                &EntryChange::replace(payload.clone(), expires_at),
            )?;
            if affected == 0 {
                debug!("Update for key '{}' matched an expired entry, no effect", key);
                return Ok(None);
            }
            Ok(Some(CacheRecord::new(key, payload, expires_at)))
        } else {
            let record = CacheRecord::new(key, payload, expires_at);
            self.store.insert(record.clone().into())?;
            Ok(Some(record))
        }
    }

    // == List Keys ==
    /// Returns the keys of all currently live entries.
    pub fn list_keys(&self) -> Result<Vec<String>> {
        Ok(self.store.live_keys(current_timestamp_ms())?)
    }

    // == Delete ==
    /// Removes the entry under `key` regardless of liveness.
    pub fn delete_by_key(&self, key: &str) -> Result<()> {
        if self.store.delete_by_key(key)? {
            Ok(())
        } else {
            Err(CacheError::NotFound(key.to_string()))
        }
    }

    // == Delete All ==
    /// Removes every entry. A no-op on an empty store.
    pub fn delete_all(&self) -> Result<()> {
        Ok(self.store.delete_all()?)
    }

    // == Takeover ==
    /// Admits `value` by overwriting the first expired entry.
    ///
    /// The victim keeps its own key: the admitted payload ends up addressed
    /// by whatever key the expired record held. With no expired entry the
    /// store is full of live data and admission fails.
    fn take_over_expired(&self, value: Value, now: u64) -> Result<CacheRecord> {
        let victim = self
            .store
            .find_expired(now)?
            .ok_or(CacheError::LimitExceeded)?;
        let expires_at = self.expiration(now);
        self.store.update_entry(
            &EntryFilter::by_key(&victim.key),
            &EntryChange::replace(value.clone(), expires_at),
        )?;
        Ok(CacheRecord::new(victim.key, value, expires_at))
    }

    fn expiration(&self, now: u64) -> u64 {
        expiration_from(now, self.config.idle_ttl_secs)
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::Validation("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::Validation(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}

fn validate_payload(payload: &Value) -> Result<()> {
    if payload.is_null() {
        return Err(CacheError::Validation(
            "Payload cannot be null".to_string(),
        ));
    }
    Ok(())
}
