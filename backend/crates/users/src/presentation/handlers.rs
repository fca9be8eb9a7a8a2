//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::UsersConfig;
use crate::application::{
    CreateUserInput, CreateUserUseCase, FindUserUseCase, ListUsersUseCase, RemoveUserUseCase,
    UpdateUserInput, UpdateUserUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::UsersResult;
use crate::presentation::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use kernel::id::UserId;

/// Shared state for user handlers
#[derive(Clone)]
pub struct UsersAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<UsersConfig>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/users
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    Json(req): Json<CreateUserRequest>,
) -> UsersResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateUserUseCase::new(state.repo.clone(), state.config.clone());

    let input = CreateUserInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let user = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

// ============================================================================
// List
// ============================================================================

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<UsersAppState<R>>,
) -> UsersResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());

    let users = use_case.execute().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ============================================================================
// Get One
// ============================================================================

/// GET /api/users/{id}
pub async fn get_user<R>(
    State(state): State<UsersAppState<R>>,
    Path(id): Path<Uuid>,
) -> UsersResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = FindUserUseCase::new(state.repo.clone());

    let user = use_case.by_id(&UserId::from_uuid(id)).await?;

    Ok(Json(UserResponse::from(user)))
}

// ============================================================================
// Update
// ============================================================================

/// PATCH /api/users/{id}
pub async fn update_user<R>(
    State(state): State<UsersAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> UsersResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateUserUseCase::new(state.repo.clone());

    let input = UpdateUserInput {
        name: req.name,
        email: req.email,
    };

    let user = use_case.execute(&UserId::from_uuid(id), input).await?;

    Ok(Json(UserResponse::from(user)))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /api/users/{id}
pub async fn delete_user<R>(
    State(state): State<UsersAppState<R>>,
    Path(id): Path<Uuid>,
) -> UsersResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RemoveUserUseCase::new(state.repo.clone());

    use_case.execute(&UserId::from_uuid(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
