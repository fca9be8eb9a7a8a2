//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateCourseInput, CreateCourseUseCase, DeleteCourseUseCase, GetCourseUseCase,
    ListCoursesUseCase, UpdateCourseInput, UpdateCourseUseCase,
};
use crate::domain::repository::CourseRepository;
use crate::error::CoursesResult;
use crate::presentation::dto::{CourseResponse, CreateCourseRequest, UpdateCourseRequest};
use kernel::id::CourseId;

/// Shared state for course handlers
#[derive(Clone)]
pub struct CoursesAppState<R>
where
    R: CourseRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// List
// ============================================================================

/// GET /api/courses
pub async fn list_courses<R>(
    State(state): State<CoursesAppState<R>>,
) -> CoursesResult<Json<Vec<CourseResponse>>>
where
    R: CourseRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCoursesUseCase::new(state.repo.clone());

    let courses = use_case.execute().await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

// ============================================================================
// Get One
// ============================================================================

/// GET /api/courses/{id}
pub async fn get_course<R>(
    State(state): State<CoursesAppState<R>>,
    Path(id): Path<Uuid>,
) -> CoursesResult<Json<CourseResponse>>
where
    R: CourseRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetCourseUseCase::new(state.repo.clone());

    let course = use_case.execute(&CourseId::from_uuid(id)).await?;

    Ok(Json(CourseResponse::from(course)))
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/courses
pub async fn create_course<R>(
    State(state): State<CoursesAppState<R>>,
    Json(req): Json<CreateCourseRequest>,
) -> CoursesResult<impl IntoResponse>
where
    R: CourseRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateCourseUseCase::new(state.repo.clone());

    let input = CreateCourseInput {
        name: req.name,
        description: req.description,
        tags: req.tags,
    };

    let course = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

// ============================================================================
// Update
// ============================================================================

/// PATCH /api/courses/{id}
pub async fn update_course<R>(
    State(state): State<CoursesAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCourseRequest>,
) -> CoursesResult<Json<CourseResponse>>
where
    R: CourseRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateCourseUseCase::new(state.repo.clone());

    let input = UpdateCourseInput {
        name: req.name,
        description: req.description,
        tags: req.tags,
    };

    let course = use_case.execute(&CourseId::from_uuid(id), input).await?;

    Ok(Json(CourseResponse::from(course)))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /api/courses/{id}
pub async fn delete_course<R>(
    State(state): State<CoursesAppState<R>>,
    Path(id): Path<Uuid>,
) -> CoursesResult<StatusCode>
where
    R: CourseRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteCourseUseCase::new(state.repo.clone());

    use_case.execute(&CourseId::from_uuid(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
