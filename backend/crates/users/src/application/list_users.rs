//! List Users Use Case

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::UsersResult;

/// List users use case
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> UsersResult<Vec<User>> {
        self.repo.find_all().await
    }
}
