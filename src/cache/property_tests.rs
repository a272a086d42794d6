//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the cache's behavioral guarantees over arbitrary
//! keys, payloads, and operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use crate::cache::CacheStore;

// == Strategies ==
/// Generates URL-shaped cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_/:.-]{1,64}"
}

/// Generates opaque byte payloads, including the empty payload
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// A sequence element for exercising the store
#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, payload: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), payload_strategy())
            .prop_map(|(key, payload)| CacheOp::Add { key, payload }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a payload and retrieving it before any reap returns the exact
    // bytes that were stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), payload in payload_strategy()) {
        let mut store = CacheStore::new();

        store.add(key.clone(), payload.clone());

        let retrieved = store.get(&key);
        prop_assert_eq!(retrieved, Some(payload), "round-trip payload mismatch");
    }

    // A key that was never added always misses.
    #[test]
    fn prop_miss_on_unknown_key(key in key_strategy()) {
        let mut store = CacheStore::new();

        prop_assert_eq!(store.get(&key), None);
    }

    // Adding twice under the same key leaves exactly one entry holding the
    // second payload.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        payload1 in payload_strategy(),
        payload2 in payload_strategy()
    ) {
        let mut store = CacheStore::new();

        store.add(key.clone(), payload1);
        store.add(key.clone(), payload2.clone());

        prop_assert_eq!(store.get(&key), Some(payload2), "overwrite should return new payload");
        prop_assert_eq!(store.len(), 1, "should have exactly one entry after overwrite");
    }

    // For any operation sequence, the hit/miss counters match a replay of
    // the sequence against a model map, and the entry count matches the
    // number of distinct added keys.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new();
        let mut model: HashSet<String> = HashSet::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Add { key, payload } => {
                    store.add(key.clone(), payload);
                    model.insert(key);
                }
                CacheOp::Get { key } => {
                    if model.contains(&key) {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                    let _ = store.get(&key);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "misses mismatch");
        prop_assert_eq!(stats.total_entries, model.len(), "entry count mismatch");
        prop_assert_eq!(store.len(), model.len());
    }

    // A sweep with a generous max age removes nothing; a zero max age
    // removes everything, since age >= 0 always holds.
    #[test]
    fn prop_reap_is_age_bounded(
        entries in prop::collection::hash_map(key_strategy(), payload_strategy(), 1..20)
    ) {
        let mut store = CacheStore::new();

        for (key, payload) in &entries {
            store.add(key.clone(), payload.clone());
        }

        let removed = store.reap_expired(Duration::from_secs(3600));
        prop_assert_eq!(removed, 0, "fresh entries must survive a sweep");
        prop_assert_eq!(store.len(), entries.len());

        let removed = store.reap_expired(Duration::ZERO);
        prop_assert_eq!(removed, entries.len(), "zero max age expires everything");
        prop_assert!(store.is_empty());
    }
}

// Concurrent access through the shared handle: parallel adds and gets must
// never corrupt the map, and every retrieved payload must be a complete
// value that was written for that key.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_concurrent_operation_correctness(
        entries in prop::collection::hash_map(key_strategy(), payload_strategy(), 1..16),
        ops in prop::collection::vec(cache_op_strategy(), 10..50)
    ) {
        use std::sync::Arc;
        use tokio::sync::RwLock;

        let rt = tokio::runtime::Runtime::new().unwrap();

        rt.block_on(async {
            let store = Arc::new(RwLock::new(CacheStore::new()));

            // Seed with known entries
            {
                let mut guard = store.write().await;
                for (key, payload) in &entries {
                    guard.add(key.clone(), payload.clone());
                }
            }

            let mut handles = vec![];
            for op in ops {
                let store = Arc::clone(&store);

                handles.push(tokio::spawn(async move {
                    match op {
                        CacheOp::Add { key, payload } => {
                            store.write().await.add(key, payload);
                            Ok::<_, String>(())
                        }
                        CacheOp::Get { key } => {
                            // Every payload ever written here is under 256
                            // bytes; anything larger is a torn read
                            if let Some(found) = store.write().await.get(&key) {
                                if found.len() >= 256 {
                                    return Err(format!("corrupted payload for '{}'", key));
                                }
                            }
                            Ok(())
                        }
                    }
                }));
            }

            for handle in handles {
                let result = handle.await.expect("task should not panic");
                prop_assert!(result.is_ok(), "concurrent operation failed: {:?}", result);
            }

            // The map is consistent afterwards
            let guard = store.read().await;
            let stats = guard.stats();
            let hit_rate = stats.hit_rate();
            prop_assert!(
                (0.0..=1.0).contains(&hit_rate),
                "hit rate should be between 0 and 1, got {}",
                hit_rate
            );
            prop_assert_eq!(stats.total_entries, guard.len());

            Ok(())
        })?;
    }
}
