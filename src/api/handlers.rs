//! API Handlers
//!
//! HTTP request handlers for the course endpoints. Each course handler
//! consults the cache first and only queries the repository on a miss.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    http::{header, HeaderName},
    Json,
};
use tracing::{debug, error};

use crate::cache::{duration_ms, TimedCache};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    course_cache_key, owner_cache_key, CachedResult, Course, CourseListResponse, CourseQuery,
    CourseResponse, HealthResponse, ListCoursesRequest, StatsResponse,
};
use crate::repository::CourseRepository;

/// `Cache-Control` sent with owner course lists.
pub const LIST_CACHE_CONTROL: &str = "public, s-maxage=180, stale-while-revalidate=300";

/// `Cache-Control` sent with single course lookups.
pub const COURSE_CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=600";

/// JSON body with a `Cache-Control` header.
pub type CachedJson<T> = ([(HeaderName, &'static str); 1], Json<T>);

/// Application state shared across all handlers.
///
/// The cache is created once at startup and injected here; nothing in the
/// crate holds it as a global.
#[derive(Clone)]
pub struct AppState {
    /// Shared course cache
    pub cache: Arc<RwLock<TimedCache<CachedResult>>>,
    /// Backing course store
    pub repository: Arc<dyn CourseRepository>,
}

impl AppState {
    /// Creates a new AppState with the given cache and repository.
    pub fn new(cache: TimedCache<CachedResult>, repository: Arc<dyn CourseRepository>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            repository,
        }
    }

    /// Creates a new AppState with a cache sized from the Config.
    pub fn from_config(config: &Config, repository: Arc<dyn CourseRepository>) -> Self {
        let cache = TimedCache::new(config.cache_ttl(), config.cache_max_entries);
        Self::new(cache, repository)
    }

    /// Returns the owner's cached course list, if fresh.
    async fn cached_courses(&self, key: &str) -> Option<Vec<Course>> {
        // Write lock: a lookup may drop an expired entry
        let mut cache = self.cache.write().await;
        match cache.get(key) {
            Some(CachedResult::Courses(courses)) => Some(courses.clone()),
            _ => None,
        }
    }

    /// Returns the cached single course, if fresh.
    async fn cached_course(&self, key: &str) -> Option<Course> {
        let mut cache = self.cache.write().await;
        match cache.get(key) {
            Some(CachedResult::Course(course)) => Some(course.clone()),
            _ => None,
        }
    }

    async fn store(&self, key: String, value: CachedResult) {
        self.cache.write().await.set(key, value);
    }
}

/// Handler for POST /courses
///
/// Lists the courses created by `createdBy`, newest first. Results, empty
/// lists included, are cached under `courses_<createdBy>`.
///
/// The cache lock is not held while the repository is queried, so two
/// concurrent misses for the same owner both reach the store.
pub async fn list_courses_handler(
    State(state): State<AppState>,
    Json(req): Json<ListCoursesRequest>,
) -> Result<CachedJson<CourseListResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let key = owner_cache_key(&req.created_by);
    let courses = match state.cached_courses(&key).await {
        Some(courses) => courses,
        None => {
            let courses = state
                .repository
                .list_by_owner(&req.created_by)
                .await
                .map_err(|err| {
                    error!(owner = %req.created_by, "Failed to list courses: {:#}", err);
                    ApiError::from(err)
                })?;
            debug!(owner = %req.created_by, count = courses.len(), "Caching course list");
            state
                .store(key, CachedResult::Courses(courses.clone()))
                .await;
            courses
        }
    };

    Ok((
        [(header::CACHE_CONTROL, LIST_CACHE_CONTROL)],
        Json(CourseListResponse::new(courses)),
    ))
}

/// Handler for GET /courses?courseId=
///
/// Fetches one course. Only found courses are cached; a missing course
/// answers `{"result": null}` and is looked up again next time.
pub async fn get_course_handler(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> Result<CachedJson<CourseResponse>> {
    let course_id = query.course_id().map_err(ApiError::InvalidRequest)?;

    let key = course_cache_key(course_id);
    let course = match state.cached_course(&key).await {
        Some(course) => Some(course),
        None => {
            let course = state.repository.get_by_id(course_id).await.map_err(|err| {
                error!(course_id, "Failed to fetch course: {:#}", err);
                ApiError::from(err)
            })?;
            if let Some(found) = &course {
                state.store(key, CachedResult::Course(found.clone())).await;
            }
            course
        }
    };

    Ok((
        [(header::CACHE_CONTROL, COURSE_CACHE_CONTROL)],
        Json(CourseResponse::new(course)),
    ))
}

/// Handler for GET /stats
///
/// Returns cache counters and settings.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        &stats,
        duration_ms(cache.ttl()),
        cache.max_entries(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
