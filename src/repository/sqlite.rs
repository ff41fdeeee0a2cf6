//! SQLite course repository backed by an sqlx connection pool.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use tracing::debug;

use super::CourseRepository;
use crate::models::{Course, CourseRow, NewCourse};

const SELECT_COLUMNS: &str = "SELECT id, course_id, course_type, topic, difficulty_level, \
     course_layout, created_by, status FROM study_material";

/// `SQLite` implementation of `CourseRepository`
#[derive(Debug, Clone)]
pub struct SqliteCourseRepository {
    pool: SqlitePool,
}

impl SqliteCourseRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `database_url` and makes sure the table exists.
    ///
    /// An in-memory database (`sqlite::memory:` or `mode=memory`) gets a
    /// single long-lived connection, since every `SQLite` memory connection
    /// is its own database.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .context("invalid database URL")?
            .create_if_missing(true);

        let pool_options = if is_in_memory(&options) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .context("failed to create connection pool")?;

        let repo = Self::new(pool);
        repo.init_schema().await?;
        Ok(repo)
    }

    /// Creates the `study_material` table and its owner index if missing.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS study_material (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                course_id TEXT NOT NULL,
                course_type TEXT NOT NULL,
                topic TEXT NOT NULL,
                difficulty_level TEXT NOT NULL DEFAULT 'Easy',
                course_layout TEXT,
                created_by TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'Generating'
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("failed to create study_material table")?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_study_material_created_by ON study_material (created_by)",
        )
        .execute(&self.pool)
        .await
        .context("failed to create created_by index")?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Whether `options` open a memory database rather than a file.
fn is_in_memory(options: &SqliteConnectOptions) -> bool {
    options
        .to_url_lossy()
        .query_pairs()
        .any(|(key, value)| key == "mode" && value == "memory")
}

#[async_trait]
impl CourseRepository for SqliteCourseRepository {
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Course>> {
        debug!(owner_id, "Querying courses by owner");
        let rows = sqlx::query_as::<_, CourseRow>(&format!(
            "{} WHERE created_by = ? ORDER BY id DESC",
            SELECT_COLUMNS
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .context("failed to list courses by owner")?;

        rows.into_iter().map(Course::try_from).collect()
    }

    async fn get_by_id(&self, course_id: &str) -> Result<Option<Course>> {
        debug!(course_id, "Querying course by id");
        let row = sqlx::query_as::<_, CourseRow>(&format!(
            "{} WHERE course_id = ? ORDER BY id LIMIT 1",
            SELECT_COLUMNS
        ))
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to fetch course")?;

        row.map(Course::try_from).transpose()
    }

    async fn insert(&self, course: NewCourse) -> Result<Course> {
        let layout_json = course
            .course_layout
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .context("failed to serialize course layout")?;

        let result = sqlx::query(
            r#"
            INSERT INTO study_material
                (course_id, course_type, topic, difficulty_level, course_layout, created_by, status)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&course.course_id)
        .bind(&course.course_type)
        .bind(&course.topic)
        .bind(&course.difficulty_level)
        .bind(layout_json)
        .bind(&course.created_by)
        .bind(&course.status)
        .execute(&self.pool)
        .await
        .context("failed to insert course")?;

        Ok(course.into_course(result.last_insert_rowid()))
    }
}
