//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::course::Course;

// ============================================================================
// Create
// ============================================================================

/// Create course request
///
/// Every field is optional at the wire level; presence is validated by the
/// use case so that all missing fields can be reported in one response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Update
// ============================================================================

/// Update course request (partial; omitted fields stay unchanged)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Response
// ============================================================================

/// Course response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.course_id.to_string(),
            name: course.name,
            description: course.description,
            tags: course.tags,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}
