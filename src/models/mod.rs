//! Course records and request/response models for the course API
//!
//! This module defines the stored course type, the value kept in the cache,
//! and the DTOs used for HTTP request and response bodies.

pub mod course;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use course::{course_cache_key, owner_cache_key, CachedResult, Course, CourseRow, NewCourse};
pub use requests::{CourseQuery, ListCoursesRequest};
pub use responses::{
    CourseListResponse, CourseResponse, ErrorResponse, HealthResponse, StatsResponse,
};
