//! Courses Error Types
//!
//! This module provides course-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Courses-specific result type alias
pub type CoursesResult<T> = Result<T, CoursesError>;

/// Courses-specific error variants
#[derive(Debug, Error)]
pub enum CoursesError {
    /// Course not found
    #[error("Course not found")]
    CourseNotFound,

    /// Required fields missing or empty on create/update
    #[error("Validation failed: {} missing field(s)", .0.len())]
    MissingFields(Vec<&'static str>),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoursesError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CoursesError::CourseNotFound => StatusCode::NOT_FOUND,
            CoursesError::MissingFields(_) => StatusCode::BAD_REQUEST,
            CoursesError::Database(_) | CoursesError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoursesError::CourseNotFound => ErrorKind::NotFound,
            CoursesError::MissingFields(_) => ErrorKind::BadRequest,
            CoursesError::Database(_) | CoursesError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Missing fields are reported together, one message per field.
    /// Database errors go through the kernel sqlx conversion so Postgres
    /// error codes keep their status mapping.
    pub fn into_app_error(self) -> AppError {
        match self {
            CoursesError::MissingFields(fields) => {
                let mut err = AppError::bad_request("Validation failed");
                for field in fields {
                    err = err.with_field_error(field, format!("{} is missing", field));
                }
                err
            }
            CoursesError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CoursesError::Database(e) => {
                tracing::error!(error = %e, "Courses database error");
            }
            CoursesError::Internal(msg) => {
                tracing::error!(message = %msg, "Courses internal error");
            }
            CoursesError::MissingFields(fields) => {
                tracing::debug!(fields = ?fields, "Course validation failed");
            }
            _ => {
                tracing::debug!(error = %self, "Courses error");
            }
        }
    }
}

impl IntoResponse for CoursesError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for CoursesError {
    fn from(err: AppError) -> Self {
        CoursesError::Internal(err.to_string())
    }
}
