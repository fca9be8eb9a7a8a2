//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::course::Course;
use crate::error::CoursesResult;
use kernel::id::CourseId;

/// Course repository trait
#[trait_variant::make(CourseRepository: Send)]
pub trait LocalCourseRepository {
    /// Create a new course
    async fn create(&self, course: &Course) -> CoursesResult<()>;

    /// Find course by ID
    async fn find_by_id(&self, course_id: &CourseId) -> CoursesResult<Option<Course>>;

    /// List all courses in persistence order
    async fn find_all(&self) -> CoursesResult<Vec<Course>>;

    /// Update a course; returns false if no row matched
    async fn update(&self, course: &Course) -> CoursesResult<bool>;

    /// Delete a course; returns false if no row matched
    async fn delete(&self, course_id: &CourseId) -> CoursesResult<bool>;
}
