//! Courses Router

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;

use crate::domain::repository::CourseRepository;
use crate::infra::postgres::PgCourseRepository;
use crate::presentation::handlers::{self, CoursesAppState};

/// Create the courses router with PostgreSQL repository
pub fn courses_router(repo: PgCourseRepository) -> Router {
    courses_router_generic(repo)
}

/// Create a generic courses router for any repository implementation
pub fn courses_router_generic<R>(repo: R) -> Router
where
    R: CourseRepository + Clone + Send + Sync + 'static,
{
    let state = CoursesAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::list_courses::<R>))
        .route("/", post(handlers::create_course::<R>))
        .route("/{id}", get(handlers::get_course::<R>))
        .route("/{id}", patch(handlers::update_course::<R>))
        .route("/{id}", delete(handlers::delete_course::<R>))
        .with_state(state)
}
