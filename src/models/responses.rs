//! Response DTOs for the course API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::Course;

/// Response body for POST /courses
#[derive(Debug, Clone, Serialize)]
pub struct CourseListResponse {
    /// Courses of the owner, newest first
    pub result: Vec<Course>,
}

impl CourseListResponse {
    pub fn new(result: Vec<Course>) -> Self {
        Self { result }
    }
}

/// Response body for GET /courses?courseId=
///
/// `result` serializes as `null` when no course matches.
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub result: Option<Course>,
}

impl CourseResponse {
    pub fn new(result: Option<Course>) -> Self {
        Self { result }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Entries dropped on lookup after their TTL ran out
    pub expirations: u64,
    /// Entries dropped to stay under the cap
    pub evictions: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Configured TTL in milliseconds
    pub ttl_ms: u64,
    /// Configured entry cap
    pub max_entries: usize,
}

impl StatsResponse {
    /// Builds the response from a stats snapshot and the cache settings.
    pub fn new(stats: &CacheStats, ttl_ms: u64, max_entries: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            evictions: stats.evictions,
            hit_rate: stats.hit_rate(),
            ttl_ms,
            max_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
