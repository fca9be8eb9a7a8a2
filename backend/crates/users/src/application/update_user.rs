//! Update User Use Case
//!
//! Partial update of name and email. Password changes are not part of this
//! operation. A field supplied blank is rejected, all such fields together.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{UsersError, UsersResult};
use kernel::id::UserId;

/// Update user input
///
/// `None` means "leave unchanged", not "clear".
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Update user use case
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId, input: UpdateUserInput) -> UsersResult<User> {
        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(UsersError::UserNotFound)?;

        let mut missing = Vec::new();

        let name = match input.name {
            None => None,
            Some(v) if v.trim().is_empty() => {
                missing.push("name");
                None
            }
            Some(v) => Some(v),
        };

        let email = match input.email {
            None => None,
            Some(v) if v.trim().is_empty() => {
                missing.push("email");
                None
            }
            Some(v) => Some(v),
        };

        if !missing.is_empty() {
            return Err(UsersError::MissingFields(missing));
        }

        if let Some(name) = name {
            user.set_name(name);
        }

        if let Some(email) = email {
            let email = Email::new(email).map_err(|e| UsersError::InvalidEmail(e.to_string()))?;

            // The unique key may only move to an address nobody else holds
            if email != user.email {
                if let Some(holder) = self.repo.find_by_email(&email).await? {
                    if holder.user_id != *user_id {
                        return Err(UsersError::EmailTaken);
                    }
                }
                user.set_email(email);
            }
        }

        // The row can disappear between the read and the write
        if !self.repo.update(&user).await? {
            return Err(UsersError::UserNotFound);
        }

        tracing::info!(user_id = %user.user_id, "User updated");

        Ok(user)
    }
}
