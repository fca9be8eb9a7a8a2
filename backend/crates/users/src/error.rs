//! Users Error Types
//!
//! This module provides user-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Users-specific result type alias
pub type UsersResult<T> = Result<T, UsersError>;

/// Users-specific error variants
#[derive(Debug, Error)]
pub enum UsersError {
    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Required fields missing or empty on create/update
    #[error("Validation failed: {} missing field(s)", .0.len())]
    MissingFields(Vec<&'static str>),

    /// Email failed format validation
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Password validation error
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UsersError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UsersError::UserNotFound => StatusCode::NOT_FOUND,
            UsersError::EmailTaken => StatusCode::CONFLICT,
            UsersError::MissingFields(_)
            | UsersError::InvalidEmail(_)
            | UsersError::PasswordValidation(_) => StatusCode::BAD_REQUEST,
            UsersError::Database(_) | UsersError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UsersError::UserNotFound => ErrorKind::NotFound,
            UsersError::EmailTaken => ErrorKind::Conflict,
            UsersError::MissingFields(_)
            | UsersError::InvalidEmail(_)
            | UsersError::PasswordValidation(_) => ErrorKind::BadRequest,
            UsersError::Database(_) | UsersError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Missing fields are reported together, one message per field.
    /// Database errors go through the kernel sqlx conversion so Postgres
    /// error codes keep their status mapping (unique violation → 409).
    pub fn into_app_error(self) -> AppError {
        match self {
            UsersError::MissingFields(fields) => {
                let mut err = AppError::bad_request("Validation failed");
                for field in fields {
                    err = err.with_field_error(field, format!("{} is missing", field));
                }
                err
            }
            UsersError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UsersError::Database(e) => {
                tracing::error!(error = %e, "Users database error");
            }
            UsersError::Internal(msg) => {
                tracing::error!(message = %msg, "Users internal error");
            }
            UsersError::EmailTaken => {
                tracing::debug!("Attempt to register an already-registered email");
            }
            UsersError::MissingFields(fields) => {
                tracing::debug!(fields = ?fields, "User validation failed");
            }
            _ => {
                tracing::debug!(error = %self, "Users error");
            }
        }
    }
}

impl IntoResponse for UsersError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for UsersError {
    fn from(err: AppError) -> Self {
        UsersError::Internal(err.to_string())
    }
}
