//! Remove User Use Case

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::error::{UsersError, UsersResult};
use kernel::id::UserId;

/// Remove user use case
pub struct RemoveUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RemoveUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> UsersResult<()> {
        if !self.repo.delete(user_id).await? {
            return Err(UsersError::UserNotFound);
        }

        tracing::info!(user_id = %user_id, "User removed");

        Ok(())
    }
}
