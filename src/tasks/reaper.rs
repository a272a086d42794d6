//! Cache Reaper Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically reaps expired cache entries.
///
/// The task loops forever: it sleeps for `interval`, wakes, takes the write
/// lock, deletes every entry whose age has reached `interval`, and goes back
/// to sleep. A sweep that finds nothing to remove is normal; the task never
/// terminates on its own.
///
/// Because eviction only happens on wake-ups, an entry may stay retrievable
/// for up to one extra interval past its nominal TTL.
///
/// # Arguments
/// * `store` - shared reference to the cache store
/// * `interval` - both the wake period and the maximum entry age
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort the reaper when its
/// cache is dropped.
pub fn spawn_reaper(store: Arc<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("starting cache reaper with interval {:?}", interval);

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and sweep expired entries
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.reap_expired(interval)
            };

            if removed > 0 {
                info!("cache reaper removed {} expired entries", removed);
            } else {
                debug!("cache reaper found no expired entries");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reaper_removes_expired_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new()));

        {
            let mut store_guard = store.write().await;
            store_guard.add("expire_soon".to_string(), b"value".to_vec());
        }

        let handle = spawn_reaper(store.clone(), Duration::from_millis(50));

        // Wait past two intervals so at least one sweep saw the entry expired
        tokio::time::sleep(Duration::from_millis(130)).await;

        {
            let mut store_guard = store.write().await;
            assert_eq!(
                store_guard.get("expire_soon"),
                None,
                "expired entry should have been reaped"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_reaper_preserves_fresh_entries() {
        let store = Arc::new(RwLock::new(CacheStore::new()));

        let handle = spawn_reaper(store.clone(), Duration::from_millis(100));

        // Insert shortly before the first sweep: the entry's age at sweep
        // time is well under the interval, so it must survive
        tokio::time::sleep(Duration::from_millis(60)).await;
        {
            let mut store_guard = store.write().await;
            store_guard.add("fresh".to_string(), b"value".to_vec());
        }

        tokio::time::sleep(Duration::from_millis(60)).await;

        {
            let mut store_guard = store.write().await;
            assert_eq!(
                store_guard.get("fresh"),
                Some(b"value".to_vec()),
                "fresh entry should not be reaped"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_reaper_ticks_with_empty_store() {
        let store = Arc::new(RwLock::new(CacheStore::new()));

        let handle = spawn_reaper(store.clone(), Duration::from_millis(10));

        // Several no-op sweeps must neither error nor wedge the lock
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(store.read().await.is_empty());
        assert!(!handle.is_finished(), "reaper must keep running with nothing to evict");

        handle.abort();
    }

    #[tokio::test]
    async fn test_reaper_can_be_aborted() {
        let store = Arc::new(RwLock::new(CacheStore::new()));

        let handle = spawn_reaper(store, Duration::from_millis(10));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished(), "task should be finished after abort");
    }
}
