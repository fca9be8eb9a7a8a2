//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::UsersResult;
use kernel::id::UserId;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> UsersResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> UsersResult<Option<User>>;

    /// Find user by email (the natural unique lookup key)
    async fn find_by_email(&self, email: &Email) -> UsersResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> UsersResult<bool>;

    /// List all users in persistence order
    async fn find_all(&self) -> UsersResult<Vec<User>>;

    /// Update a user; returns false if no row matched
    async fn update(&self, user: &User) -> UsersResult<bool>;

    /// Delete a user; returns false if no row matched
    async fn delete(&self, user_id: &UserId) -> UsersResult<bool>;
}
