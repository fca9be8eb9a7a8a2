//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User CRUD with unique-email lookup
//! - Passwords hashed with Argon2id before persistence
//!
//! ## Security Model
//! - Hashing runs on the blocking pool so it never stalls the runtime
//! - The response DTO carries no password field at all, so no code path
//!   can serialize a hash back to a caller
//! - `find_by_email` returns the full entity (hash included) and stays
//!   an application-level operation, never wired to a route

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::UsersConfig;
pub use error::{UsersError, UsersResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::users_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::user::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgUserRepository as UserStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
