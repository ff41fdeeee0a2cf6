//! Course records
//!
//! Rows of the `study_material` table and the values kept in the cache.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A generated course as stored in the `study_material` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Auto-increment row id; newer courses have larger ids
    pub id: i64,
    /// Public course identifier used by `GET /courses?courseId=`
    pub course_id: String,
    pub course_type: String,
    pub topic: String,
    pub difficulty_level: String,
    /// Generated outline, if generation has finished
    pub course_layout: Option<Value>,
    /// Owner of the course
    pub created_by: String,
    pub status: String,
}

/// Fields needed to insert a course; the row id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub course_id: String,
    pub course_type: String,
    pub topic: String,
    #[serde(default = "default_difficulty")]
    pub difficulty_level: String,
    #[serde(default)]
    pub course_layout: Option<Value>,
    pub created_by: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_difficulty() -> String {
    "Easy".to_string()
}

fn default_status() -> String {
    "Generating".to_string()
}

impl NewCourse {
    /// Creates a course with default difficulty, no layout and status `Generating`.
    pub fn new(
        course_id: impl Into<String>,
        course_type: impl Into<String>,
        topic: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            course_type: course_type.into(),
            topic: topic.into(),
            difficulty_level: default_difficulty(),
            course_layout: None,
            created_by: created_by.into(),
            status: default_status(),
        }
    }

    /// Attaches a generated layout.
    pub fn with_layout(mut self, layout: Value) -> Self {
        self.course_layout = Some(layout);
        self
    }

    /// Turns the draft into a stored course with the given row id.
    pub fn into_course(self, id: i64) -> Course {
        Course {
            id,
            course_id: self.course_id,
            course_type: self.course_type,
            topic: self.topic,
            difficulty_level: self.difficulty_level,
            course_layout: self.course_layout,
            created_by: self.created_by,
            status: self.status,
        }
    }
}

/// Raw row as read by sqlx; `course_layout` is JSON text.
#[derive(Debug, sqlx::FromRow)]
pub struct CourseRow {
    pub id: i64,
    pub course_id: String,
    pub course_type: String,
    pub topic: String,
    pub difficulty_level: String,
    pub course_layout: Option<String>,
    pub created_by: String,
    pub status: String,
}

impl TryFrom<CourseRow> for Course {
    type Error = anyhow::Error;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let course_layout = row
            .course_layout
            .as_deref()
            .map(serde_json::from_str::<Value>)
            .transpose()
            .with_context(|| format!("invalid course_layout JSON for course {}", row.course_id))?;

        Ok(Self {
            id: row.id,
            course_id: row.course_id,
            course_type: row.course_type,
            topic: row.topic,
            difficulty_level: row.difficulty_level,
            course_layout,
            created_by: row.created_by,
            status: row.status,
        })
    }
}

/// Value type held in the shared course cache.
///
/// List and single lookups share one cache and one entry cap; their keys are
/// namespaced so they never collide.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedResult {
    /// Courses of one owner, newest first
    Courses(Vec<Course>),
    /// A single course found by its course id
    Course(Course),
}

/// Cache key for an owner's course list.
pub fn owner_cache_key(owner_id: &str) -> String {
    format!("courses_{}", owner_id)
}

/// Cache key for a single course.
pub fn course_cache_key(course_id: &str) -> String {
    format!("course_{}", course_id)
}
