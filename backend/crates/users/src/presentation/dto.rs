//! API DTOs (Data Transfer Objects)
//!
//! `UserResponse` deliberately has no password field. Redaction is not a
//! step that could be forgotten; the outward shape cannot express a hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Create
// ============================================================================

/// Create user request
///
/// Every field is optional at the wire level; presence is validated by the
/// use case so that all missing fields can be reported in one response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Update
// ============================================================================

/// Update user request (partial; omitted fields stay unchanged)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

// ============================================================================
// Response
// ============================================================================

/// User response (password-free by construction)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.to_string(),
            name: user.name,
            email: user.email.into_db(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
