//! Cache Entry Module
//!
//! A stored value stamped with the time it was inserted.

// == Cache Entry ==
/// A single cached value and its insertion timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates an entry inserted at `inserted_at`.
    pub fn new(value: T, inserted_at: u64) -> Self {
        Self { value, inserted_at }
    }

    // == Age ==
    /// Milliseconds elapsed since insertion. A clock that moved backwards
    /// yields zero.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl_ms`.
    ///
    /// An entry is valid while `age < ttl`, so it is already expired at the
    /// exact moment its age reaches the TTL.
    pub fn is_expired(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) >= ttl_ms
    }
}
