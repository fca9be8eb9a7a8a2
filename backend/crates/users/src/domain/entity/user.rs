//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_password::UserPassword};

/// User entity
///
/// Carries the hashed credential; the presentation layer is the only place
/// allowed to turn a `User` into an outward-facing shape, and that shape
/// has no password field.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Unique email, also a natural lookup key
    pub email: Email,
    /// Argon2id hash in PHC format (never serialized outward)
    pub password: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(name: String, email: Email, password: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the email
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }
}
