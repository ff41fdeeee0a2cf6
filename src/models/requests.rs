//! Request DTOs for the course API
//!
//! Defines the structure of incoming request bodies and query strings.

use serde::Deserialize;

/// Request body for listing an owner's courses (POST /courses)
#[derive(Debug, Clone, Deserialize)]
pub struct ListCoursesRequest {
    /// Owner whose courses to list
    #[serde(rename = "createdBy")]
    pub created_by: String,
}

impl ListCoursesRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.created_by.trim().is_empty() {
            return Some("createdBy cannot be empty".to_string());
        }
        None
    }
}

/// Query string for fetching a single course (GET /courses?courseId=)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseQuery {
    #[serde(rename = "courseId")]
    pub course_id: Option<String>,
}

impl CourseQuery {
    /// Returns the requested course id, or an error message if it is
    /// missing or blank.
    pub fn course_id(&self) -> Result<&str, String> {
        match self.course_id.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(id),
            _ => Err("courseId query parameter is required".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_request_deserialize() {
        let json = r#"{"createdBy": "alice@example.com"}"#;
        let req: ListCoursesRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.created_by, "alice@example.com");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_list_request_missing_field() {
        let json = r#"{"owner": "alice"}"#;
        assert!(serde_json::from_str::<ListCoursesRequest>(json).is_err());
    }

    #[test]
    fn test_validate_blank_owner() {
        let req = ListCoursesRequest {
            created_by: "   ".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_course_query_present() {
        let query = CourseQuery {
            course_id: Some("c-1".to_string()),
        };
        assert_eq!(query.course_id(), Ok("c-1"));
    }

    #[test]
    fn test_course_query_missing_or_empty() {
        assert!(CourseQuery::default().course_id().is_err());

        let query = CourseQuery {
            course_id: Some(String::new()),
        };
        assert!(query.course_id().is_err());
    }
}
