//! Cache Store Module
//!
//! Inner cache engine: a plain key/value map of response payloads with
//! insertion timestamps. Concurrency and reaping live one layer up, in
//! [`ResponseCache`](crate::cache::ResponseCache) and the reaper task.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key/value storage for raw response payloads.
///
/// Lookups never check entry age: staleness is solely the reaper's
/// responsibility, so an entry past its TTL but not yet reaped is still
/// a hit. This bounded staleness window is intentional.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-payload storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key` with the given payload.
    ///
    /// Overwriting resets the entry's insertion timestamp, so a re-added
    /// key earns a fresh TTL. Insertion always succeeds.
    pub fn add(&mut self, key: String, payload: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(payload));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a payload by key.
    ///
    /// Returns the last-written payload if present, `None` otherwise.
    /// Does not distinguish "never inserted" from "expired and reaped".
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap Expired ==
    /// Removes every entry whose age has reached `max_age`.
    ///
    /// Returns the number of entries removed. Removal order is unspecified.
    pub fn reap_expired(&mut self, max_age: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(max_age));
        let removed = before - self.entries.len();

        self.stats.record_evictions(removed as u64);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
