//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{UserCreate, UserResponse, UserUpdate};
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

#[derive(Serialize)]
pub(crate) struct UserPayload {
    user: UserResponse,
}

#[derive(Serialize)]
pub(crate) struct UserListPayload {
    users: Vec<UserResponse>,
}

#[derive(Serialize)]
pub(crate) struct Empty {}

/// POST /api/user/create
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<UserPayload>>)> {
    let user = payload.into_user()?;
    let user = UserRepository::new(state.get_db()).create(user).await?;
    Ok((
        StatusCode::CREATED,
        ok_with_message(UserPayload { user: user.into() }, "User created successfully"),
    ))
}

/// GET /api/user/read
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<UserListPayload>>> {
    let users = UserRepository::new(state.get_db()).find_all().await?;
    let users = users.into_iter().map(UserResponse::from).collect();
    Ok(ok(UserListPayload { users }))
}

/// GET /api/user/get/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<UserPayload>>> {
    let user = UserRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", id)))?;
    Ok(ok(UserPayload { user: user.into() }))
}

/// PUT /api/user/update/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<UserUpdate>,
) -> AppResult<Json<AppResponse<UserPayload>>> {
    let user = UserRepository::new(state.get_db()).update(&id, patch).await?;
    Ok(ok_with_message(
        UserPayload { user: user.into() },
        "User updated successfully",
    ))
}

/// DELETE /api/user/delete/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Empty>>> {
    UserRepository::new(state.get_db()).delete(&id).await?;
    Ok(ok_with_message(Empty {}, "User deleted successfully"))
}
