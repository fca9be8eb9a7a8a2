//! Find User Use Case
//!
//! Two lookups with deliberately different not-found semantics:
//! - `by_id` serves the HTTP surface, so an absent id is a distinct error
//! - `by_email` is internal plumbing; no match is an ordinary `None`, and
//!   the returned entity (hash included) must not cross the HTTP boundary

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{UsersError, UsersResult};
use kernel::id::UserId;

/// Find user use case
pub struct FindUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> FindUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch by identifier; absent is a not-found error
    pub async fn by_id(&self, user_id: &UserId) -> UsersResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(UsersError::UserNotFound)
    }

    /// Fetch by email; absent is an empty result, not an error
    pub async fn by_email(&self, email: &Email) -> UsersResult<Option<User>> {
        self.repo.find_by_email(email).await
    }
}
