//! Create User Use Case
//!
//! Validates the creation payload, hashes the password, and persists a new
//! user. Presence failures are collected across all required fields before
//! anything else runs.

use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{UsersError, UsersResult};

/// Create user input
pub struct CreateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Create user use case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: CreateUserInput) -> UsersResult<User> {
        let name = present(input.name);
        let email = present(input.email);
        let password = present(input.password);

        // One condition per required field; all failures reported together
        let (name, email, password) = match (name, email, password) {
            (Some(name), Some(email), Some(password)) => (name, email, password),
            (name, email, password) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push("name");
                }
                if email.is_none() {
                    missing.push("email");
                }
                if password.is_none() {
                    missing.push("password");
                }
                return Err(UsersError::MissingFields(missing));
            }
        };

        let email = Email::new(email).map_err(|e| UsersError::InvalidEmail(e.to_string()))?;

        if self.repo.exists_by_email(&email).await? {
            return Err(UsersError::EmailTaken);
        }

        let raw_password = RawPassword::new(password)
            .map_err(|e| UsersError::PasswordValidation(e.to_string()))?;

        // Argon2id is deliberately expensive; keep it off the runtime
        // workers so unrelated requests are not stalled behind it.
        let pepper = self.config.password_pepper.clone();
        let password = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| UsersError::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| UsersError::Internal(e.to_string()))?;

        let user = User::new(name, email, password);

        self.repo.create(&user).await?;

        tracing::info!(user_id = %user.user_id, "User created");

        Ok(user)
    }
}

/// Treat absent and blank text as the same thing: missing
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
