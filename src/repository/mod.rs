//! Repository Module
//!
//! Data access for courses. Handlers depend on the [`CourseRepository`]
//! trait and only call it when the cache has nothing usable.

mod memory;
mod sqlite;

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::models::{Course, NewCourse};

pub use memory::InMemoryCourseRepository;
pub use sqlite::SqliteCourseRepository;

/// Storage port for course records.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Lists every course created by `owner_id`, newest (highest id) first.
    ///
    /// # Errors
    /// Returns error if the underlying store cannot be queried.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Course>>;

    /// Fetches the course with the given public course id.
    ///
    /// # Returns
    /// - `Some(Course)` if found
    /// - `None` if not found
    async fn get_by_id(&self, course_id: &str) -> Result<Option<Course>>;

    /// Stores a new course and returns it with its assigned row id.
    async fn insert(&self, course: NewCourse) -> Result<Course>;
}

/// Loads a JSON array of courses from `path` and inserts each one.
///
/// Returns the number of courses inserted.
pub async fn seed_from_file(repository: &dyn CourseRepository, path: &Path) -> Result<usize> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let drafts: Vec<NewCourse> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;

    let count = drafts.len();
    for draft in drafts {
        repository.insert(draft).await?;
    }

    info!("Seeded {} courses from {}", count, path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_from_file() {
        let path = std::env::temp_dir().join(format!("course_seed_{}.json", std::process::id()));
        tokio::fs::write(
            &path,
            r#"[
                {"courseId":"c-1","courseType":"exam","topic":"Lifetimes","createdBy":"alice"},
                {"courseId":"c-2","courseType":"exam","topic":"Traits","createdBy":"alice"}
            ]"#,
        )
        .await
        .unwrap();

        let repo = InMemoryCourseRepository::new();
        let count = seed_from_file(&repo, &path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(count, 2);
        let courses = repo.list_by_owner("alice").await.unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].course_id, "c-2");
    }

    #[tokio::test]
    async fn test_seed_missing_file() {
        let repo = InMemoryCourseRepository::new();
        let result = seed_from_file(&repo, Path::new("/definitely/not/here.json")).await;
        assert!(result.is_err());
    }
}
