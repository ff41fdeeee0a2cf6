//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache's lookup, expiry and eviction rules
//! over arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{Clock, ManualClock, TimedCache};

// == Test Configuration ==
const TEST_TTL_MS: u64 = 1_000;

// == Strategies ==
/// Generates cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_]{1,16}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32 },
    Get { key: String },
    Advance { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => (0u64..1_500).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

fn manual_cache(max_entries: usize) -> (TimedCache<u32>, ManualClock) {
    let clock = ManualClock::new(0);
    let cache = TimedCache::with_clock(
        Duration::from_millis(TEST_TTL_MS),
        max_entries,
        Arc::new(clock.clone()),
    );
    (cache, clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A key that was never set is always absent.
    #[test]
    fn prop_unknown_keys_absent(
        keys in prop::collection::vec(key_strategy(), 0..20),
        probe in "[A-Z]{1,8}"
    ) {
        let (mut cache, _) = manual_cache(50);
        for key in keys {
            cache.set(key, 1);
        }
        prop_assert_eq!(cache.get(&probe), None);
    }

    // A fresh set is immediately readable.
    #[test]
    fn prop_set_then_get(key in key_strategy(), value in any::<u32>()) {
        let (mut cache, _) = manual_cache(10);
        cache.set(key.clone(), value);
        prop_assert_eq!(cache.get(&key), Some(&value));
    }

    // The entry count never exceeds the cap after any insert.
    #[test]
    fn prop_capacity_enforcement(
        ops in prop::collection::vec(cache_op_strategy(), 1..200),
        max_entries in 1usize..20
    ) {
        let (mut cache, clock) = manual_cache(max_entries);

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    cache.set(key, value);
                    prop_assert!(
                        cache.len() <= max_entries,
                        "Cache size {} exceeds max {}",
                        cache.len(),
                        max_entries
                    );
                }
                CacheOp::Get { key } => {
                    cache.get(&key);
                }
                CacheOp::Advance { ms } => clock.advance(Duration::from_millis(ms)),
            }
        }
    }

    // Filling past the cap with distinct keys settles at the cap and keeps
    // exactly the most recently inserted keys.
    #[test]
    fn prop_fifo_eviction_order(
        keys in prop::collection::hash_set(key_strategy(), 2..40),
        max_entries in 1usize..10
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let (mut cache, _) = manual_cache(max_entries);

        for (i, key) in keys.iter().enumerate() {
            cache.set(key.clone(), i as u32);
        }

        prop_assert_eq!(cache.len(), keys.len().min(max_entries));

        let survivors = keys.len().saturating_sub(max_entries);
        for (i, key) in keys.iter().enumerate() {
            if i < survivors {
                prop_assert_eq!(cache.get(key), None, "Key '{}' should have been evicted", key);
            } else {
                prop_assert_eq!(cache.get(key), Some(&(i as u32)));
            }
        }
    }

    // Lookups never change which key is evicted next.
    #[test]
    fn prop_reads_do_not_reorder(
        keys in prop::collection::hash_set(key_strategy(), 3..10),
        reads in prop::collection::vec(0usize..10, 0..20),
        new_key in "[A-Z]{1,8}"
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let (mut cache, _) = manual_cache(keys.len());

        for key in &keys {
            cache.set(key.clone(), 0);
        }
        for index in reads {
            cache.get(&keys[index % keys.len()]);
        }

        cache.set(new_key.clone(), 1);

        prop_assert_eq!(cache.get(&keys[0]), None);
        prop_assert_eq!(cache.get(&new_key), Some(&1));
    }

    // Past the TTL every entry reads as absent and is dropped from the count.
    #[test]
    fn prop_ttl_expiration(
        entries in prop::collection::hash_map(key_strategy(), any::<u32>(), 1..20),
        extra_ms in 0u64..10_000
    ) {
        let (mut cache, clock) = manual_cache(100);
        for (key, value) in &entries {
            cache.set(key.clone(), *value);
        }

        clock.advance(Duration::from_millis(TEST_TTL_MS + extra_ms));

        for key in entries.keys() {
            prop_assert_eq!(cache.get(key), None);
        }
        prop_assert_eq!(cache.len(), 0);
        prop_assert_eq!(cache.stats().expirations, entries.len() as u64);
    }

    // Hits and misses line up with a simple reference model.
    #[test]
    fn prop_matches_reference_model(ops in prop::collection::vec(cache_op_strategy(), 1..100)) {
        let max_entries = 8;
        let (mut cache, clock) = manual_cache(max_entries);

        // key -> (value, inserted_at), plus insertion order
        let mut model: HashMap<String, (u32, u64)> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            let now = clock.now_ms();
            match op {
                CacheOp::Set { key, value } => {
                    if model.insert(key.clone(), (value, now)).is_none() {
                        order.push(key.clone());
                    }
                    if model.len() > max_entries {
                        let oldest = order.remove(0);
                        model.remove(&oldest);
                    }
                    cache.set(key, value);
                }
                CacheOp::Get { key } => {
                    let stored = model.get(&key).copied();
                    let expected = match stored {
                        Some((value, at)) if now - at < TEST_TTL_MS => Some(value),
                        Some(_) => {
                            model.remove(&key);
                            order.retain(|k| k != &key);
                            None
                        }
                        None => None,
                    };
                    match expected {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                    prop_assert_eq!(cache.get(&key).copied(), expected);
                }
                CacheOp::Advance { ms } => clock.advance(Duration::from_millis(ms)),
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(cache.len(), model.len());
        let tracked: HashSet<&String> = order.iter().collect();
        prop_assert_eq!(tracked.len(), model.len());
    }
}
