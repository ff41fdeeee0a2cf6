//! API Module
//!
//! HTTP handlers and routing for the course API.
//!
//! # Endpoints
//! - `POST /courses` - List courses by owner
//! - `GET /courses?courseId=` - Fetch a single course
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
