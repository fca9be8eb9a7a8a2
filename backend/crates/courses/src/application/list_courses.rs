//! List Courses Use Case
//!
//! Returns every course in persistence order. No pagination, filtering,
//! or sorting contract is defined for the catalog.

use std::sync::Arc;

use crate::domain::entity::course::Course;
use crate::domain::repository::CourseRepository;
use crate::error::CoursesResult;

/// List courses use case
pub struct ListCoursesUseCase<R>
where
    R: CourseRepository,
{
    repo: Arc<R>,
}

impl<R> ListCoursesUseCase<R>
where
    R: CourseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CoursesResult<Vec<Course>> {
        self.repo.find_all().await
    }
}
