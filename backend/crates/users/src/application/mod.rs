//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_user;
pub mod find_user;
pub mod list_users;
pub mod remove_user;
pub mod update_user;

// Re-exports
pub use config::UsersConfig;
pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use find_user::FindUserUseCase;
pub use list_users::ListUsersUseCase;
pub use remove_user::RemoveUserUseCase;
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
