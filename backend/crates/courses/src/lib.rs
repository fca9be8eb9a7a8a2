//! Courses Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Course catalog CRUD (list, fetch, create, update, delete)
//! - Creation/update validation that reports every missing field at once
//!
//! ## Validation Model
//! A course requires a non-empty name, description, and tag list.
//! Violations surface as a 400 whose body maps each missing field to a
//! human-readable message; failures are collected, never short-circuited.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{CoursesError, CoursesResult};
pub use infra::postgres::PgCourseRepository;
pub use presentation::router::courses_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::course::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCourseRepository as CourseStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
