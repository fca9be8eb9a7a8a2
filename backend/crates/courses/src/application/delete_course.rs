//! Delete Course Use Case
//!
//! Removes a course from the catalog. Deleting an absent identifier is a
//! not-found error.

use std::sync::Arc;

use crate::domain::repository::CourseRepository;
use crate::error::{CoursesError, CoursesResult};
use kernel::id::CourseId;

/// Delete course use case
pub struct DeleteCourseUseCase<R>
where
    R: CourseRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteCourseUseCase<R>
where
    R: CourseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, course_id: &CourseId) -> CoursesResult<()> {
        if !self.repo.delete(course_id).await? {
            return Err(CoursesError::CourseNotFound);
        }

        tracing::info!(course_id = %course_id, "Course deleted");

        Ok(())
    }
}
