//! Timed Cache Module
//!
//! Process-local map from string keys to values with a fixed TTL, a cap on
//! the number of entries, and FIFO eviction by insertion order.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{duration_ms, CacheEntry, CacheStats, Clock, InsertionOrder, SystemClock};

// == Timed Cache ==
/// In-memory cache with lazy TTL expiry and a bounded entry count.
///
/// Expired entries are never swept in the background: they stay in the map
/// until a lookup for that key finds them stale, they are evicted, or they
/// are overwritten. Eviction removes the earliest inserted key, whether or
/// not it has been read since.
pub struct TimedCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// First-insertion order of the keys in `entries`
    order: InsertionOrder,
    /// Activity counters
    stats: CacheStats,
    /// Entry lifetime in milliseconds
    ttl_ms: u64,
    /// Maximum number of entries kept after an insert
    max_entries: usize,
    /// Time source for stamping and aging entries
    clock: Arc<dyn Clock>,
}

impl<T> TimedCache<T> {
    // == Constructor ==
    /// Creates a cache on the system clock.
    ///
    /// The TTL has millisecond granularity: sub-millisecond parts are dropped
    /// and durations past `u64::MAX` ms saturate.
    ///
    /// # Arguments
    /// * `ttl` - How long an entry stays valid after insertion
    /// * `max_entries` - Maximum number of entries kept after an insert
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self::with_clock(ttl, max_entries, Arc::new(SystemClock))
    }

    /// Creates a cache that reads time from `clock`.
    pub fn with_clock(ttl: Duration, max_entries: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            ttl_ms: duration_ms(ttl),
            max_entries,
            clock,
        }
    }

    // == Get ==
    /// Returns the value stored under `key` if it is still fresh.
    ///
    /// A stale entry is removed on the spot and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now, self.ttl_ms),
            None => {
                self.stats.record_miss();
                debug!(key, "Cache miss");
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.order.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            debug!(key, "Cache entry expired");
            return None;
        }

        self.stats.record_hit();
        debug!(key, "Cache hit");
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Set ==
    /// Inserts or overwrites the value under `key`, stamped with the current time.
    ///
    /// Overwriting refreshes the value and timestamp but keeps the key's
    /// original place in insertion order. If the insert pushes the cache over
    /// `max_entries`, the earliest inserted entry is dropped.
    pub fn set(&mut self, key: impl Into<String>, value: T) {
        let entry = CacheEntry::new(value, self.clock.now_ms());

        match self.entries.entry(key.into()) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(entry);
            }
            Entry::Vacant(vacant) => {
                self.order.push(vacant.key().clone());
                vacant.insert(entry);
            }
        }

        if self.entries.len() > self.max_entries {
            if let Some(oldest) = self.order.pop_oldest() {
                self.entries.remove(&oldest);
                self.stats.record_eviction();
                debug!(key = %oldest, "Evicted oldest cache entry");
            }
        }
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    /// Configured entry lifetime.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    /// Configured entry cap.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    // == Length ==
    /// Number of physically present entries, stale ones included.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        debug_assert_eq!(self.entries.len(), self.order.len());
        self.entries.len()
    }
}

impl<T> fmt::Debug for TimedCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedCache")
            .field("entries", &self.entries.len())
            .field("ttl_ms", &self.ttl_ms)
            .field("max_entries", &self.max_entries)
            .field("stats", &self.stats)
            .finish()
    }
}
