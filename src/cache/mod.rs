//! Cache Module
//!
//! Provides the in-process timed cache that sits in front of the course
//! repository: fixed TTL, lazy expiry, and FIFO eviction past a size cap.

mod clock;
mod entry;
mod order;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{duration_ms, Clock, ManualClock, SystemClock};
pub use stats::CacheStats;
pub use store::TimedCache;

pub(crate) use entry::CacheEntry;
pub(crate) use order::InsertionOrder;

// == Public Constants ==
/// Default entry lifetime (3 minutes).
pub const DEFAULT_TTL_MS: u64 = 180_000;

/// Default entry cap.
pub const DEFAULT_MAX_ENTRIES: usize = 100;
