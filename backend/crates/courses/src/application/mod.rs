//! Application Layer
//!
//! Use cases and application services.

pub mod create_course;
pub mod delete_course;
pub mod get_course;
pub mod list_courses;
pub mod update_course;

// Re-exports
pub use create_course::{CreateCourseInput, CreateCourseUseCase};
pub use delete_course::DeleteCourseUseCase;
pub use get_course::GetCourseUseCase;
pub use list_courses::ListCoursesUseCase;
pub use update_course::{UpdateCourseInput, UpdateCourseUseCase};
