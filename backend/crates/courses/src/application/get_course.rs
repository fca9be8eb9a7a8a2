//! Get Course Use Case
//!
//! Fetches a single course. An absent identifier is a distinct not-found
//! error, not an empty success.

use std::sync::Arc;

use crate::domain::entity::course::Course;
use crate::domain::repository::CourseRepository;
use crate::error::{CoursesError, CoursesResult};
use kernel::id::CourseId;

/// Get course use case
pub struct GetCourseUseCase<R>
where
    R: CourseRepository,
{
    repo: Arc<R>,
}

impl<R> GetCourseUseCase<R>
where
    R: CourseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, course_id: &CourseId) -> CoursesResult<Course> {
        self.repo
            .find_by_id(course_id)
            .await?
            .ok_or(CoursesError::CourseNotFound)
    }
}
