//! In-memory course repository for tests and local runs.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::CourseRepository;
use crate::models::{Course, NewCourse};

/// Vector-backed `CourseRepository`.
///
/// Counts read queries so callers can tell cache hits from store reads, and
/// can be switched into a failing mode to exercise error paths.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    courses: RwLock<Vec<Course>>,
    queries: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `list_by_owner` and `get_by_id` calls so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Makes every subsequent read fail until switched back.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn begin_read(&self) -> Result<()> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            bail!("course store unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Course>> {
        self.begin_read()?;
        let courses = self.courses.read().await;
        let mut owned: Vec<Course> = courses
            .iter()
            .filter(|c| c.created_by == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(owned)
    }

    async fn get_by_id(&self, course_id: &str) -> Result<Option<Course>> {
        self.begin_read()?;
        let courses = self.courses.read().await;
        Ok(courses.iter().find(|c| c.course_id == course_id).cloned())
    }

    async fn insert(&self, course: NewCourse) -> Result<Course> {
        let mut courses = self.courses.write().await;
        let id = courses.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let course = course.into_course(id);
        courses.push(course.clone());
        Ok(course)
    }
}
