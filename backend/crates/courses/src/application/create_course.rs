//! Create Course Use Case
//!
//! Validates the creation payload and persists a new course.
//! Validation collects every missing field before failing, so a payload
//! missing both name and tags reports both at once.

use std::sync::Arc;

use crate::domain::entity::course::Course;
use crate::domain::repository::CourseRepository;
use crate::error::{CoursesError, CoursesResult};

/// Create course input
///
/// Fields are optional because presence is part of the contract being
/// validated, not something the deserializer should reject early.
pub struct CreateCourseInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Create course use case
pub struct CreateCourseUseCase<R>
where
    R: CourseRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCourseUseCase<R>
where
    R: CourseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateCourseInput) -> CoursesResult<Course> {
        let name = present_text(input.name);
        let description = present_text(input.description);
        let tags = present_tags(input.tags);

        // One condition per required field; all failures reported together
        let (name, description, tags) = match (name, description, tags) {
            (Some(name), Some(description), Some(tags)) => (name, description, tags),
            (name, description, tags) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push("name");
                }
                if description.is_none() {
                    missing.push("description");
                }
                if tags.is_none() {
                    missing.push("tags");
                }
                return Err(CoursesError::MissingFields(missing));
            }
        };

        let course = Course::new(name, description, tags);

        self.repo.create(&course).await?;

        tracing::info!(
            course_id = %course.course_id,
            name = %course.name,
            "Course created"
        );

        Ok(course)
    }
}

/// Treat absent and blank text as the same thing: missing
pub(crate) fn present_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A tag list is present when at least one label is non-blank.
/// Kept labels are stored trimmed; blank labels are dropped.
pub(crate) fn present_tags(value: Option<Vec<String>>) -> Option<Vec<String>> {
    let tags: Vec<String> = value?
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if tags.is_empty() { None } else { Some(tags) }
}
