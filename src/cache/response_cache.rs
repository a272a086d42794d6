//! Response Cache Module
//!
//! Public cache handle combining the store, its lock, and the background
//! reaper task that retires entries once they outlive the configured interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::cache::{CacheStats, CacheStore};
use crate::error::{PokedexError, Result};

// == Response Cache ==
/// Concurrency-safe, time-expiring store for raw HTTP response bodies.
///
/// Each instance owns its entries, the lock guarding them, and exactly one
/// reaper task spawned at construction. The interval is dual-purpose: it is
/// both the reaper's wake period and the maximum entry age, so an entry may
/// remain retrievable for up to one extra interval before the next sweep
/// retires it.
///
/// The reaper is aborted when the cache is dropped, so short-lived instances
/// (e.g. in tests) do not leak background tasks.
#[derive(Debug)]
pub struct ResponseCache {
    /// Shared store, also held by the reaper task
    store: Arc<RwLock<CacheStore>>,
    /// Entry TTL and reaper wake period
    interval: Duration,
    /// Handle to this instance's reaper task
    reaper: JoinHandle<()>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new cache and spawns its reaper task.
    ///
    /// Must be called from within a tokio runtime. Returns
    /// [`PokedexError::InvalidInterval`] for a zero interval rather than
    /// letting the reaper busy-loop.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidInterval);
        }

        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = crate::tasks::spawn_reaper(store.clone(), interval);

        Ok(Self {
            store,
            interval,
            reaper,
        })
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key` with the given payload.
    ///
    /// The entry's TTL starts (or restarts) at the moment of insertion.
    pub async fn add(&self, key: impl Into<String>, payload: Vec<u8>) {
        let mut store = self.store.write().await;
        store.add(key.into(), payload);
    }

    // == Get ==
    /// Retrieves the last-written payload for `key`, if any.
    ///
    /// Never checks entry age: an entry past its TTL but not yet swept is
    /// still returned. A miss does not distinguish "never inserted" from
    /// "expired and reaped".
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut store = self.store.write().await;
        store.get(key)
    }

    // == Interval ==
    /// Returns the configured TTL / reaper wake period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Stats ==
    /// Returns a snapshot of current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Drop for ResponseCache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
