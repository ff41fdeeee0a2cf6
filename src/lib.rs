//! Course Cache - course lookup service with a timed in-process cache
//!
//! Serves course lists by owner and single courses by id from SQLite, with a
//! TTL-bounded, size-capped cache in front of the database.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use api::{create_router, AppState};
pub use cache::TimedCache;
pub use config::Config;
pub use repository::{CourseRepository, InMemoryCourseRepository, SqliteCourseRepository};
