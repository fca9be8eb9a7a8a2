//! Update Course Use Case
//!
//! Partial update: any subset of name/description/tags may be supplied.
//! A field that is supplied but blank is rejected the same way creation
//! rejects it, and all such fields are reported together.

use std::sync::Arc;

use crate::application::create_course::{present_text, present_tags};
use crate::domain::entity::course::Course;
use crate::domain::repository::CourseRepository;
use crate::error::{CoursesError, CoursesResult};
use kernel::id::CourseId;

/// Update course input
///
/// `None` means "leave unchanged", not "clear".
pub struct UpdateCourseInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Update course use case
pub struct UpdateCourseUseCase<R>
where
    R: CourseRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateCourseUseCase<R>
where
    R: CourseRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        course_id: &CourseId,
        input: UpdateCourseInput,
    ) -> CoursesResult<Course> {
        let mut course = self
            .repo
            .find_by_id(course_id)
            .await?
            .ok_or(CoursesError::CourseNotFound)?;

        let mut missing = Vec::new();

        let name = check_supplied(input.name.map(present_some), "name", &mut missing);
        let description =
            check_supplied(input.description.map(present_some), "description", &mut missing);
        let tags = check_supplied(input.tags.map(present_some_tags), "tags", &mut missing);

        if !missing.is_empty() {
            return Err(CoursesError::MissingFields(missing));
        }

        if let Some(name) = name {
            course.set_name(name);
        }
        if let Some(description) = description {
            course.set_description(description);
        }
        if let Some(tags) = tags {
            course.set_tags(tags);
        }

        // The row can disappear between the read and the write
        if !self.repo.update(&course).await? {
            return Err(CoursesError::CourseNotFound);
        }

        tracing::info!(course_id = %course.course_id, "Course updated");

        Ok(course)
    }
}

/// Distinguish "not supplied" (skip) from "supplied but blank" (error)
fn check_supplied<T>(
    value: Option<Option<T>>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<T> {
    match value {
        None => None,
        Some(Some(v)) => Some(v),
        Some(None) => {
            missing.push(field);
            None
        }
    }
}

fn present_some(value: String) -> Option<String> {
    present_text(Some(value))
}

fn present_some_tags(value: Vec<String>) -> Option<Vec<String>> {
    present_tags(Some(value))
}
