//! Task API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Task, TaskCreate, TaskUpdate};
use crate::db::repository::TaskRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

#[derive(Serialize)]
pub(crate) struct TaskPayload {
    task: Task,
}

#[derive(Serialize)]
pub(crate) struct TaskListPayload {
    tasks: Vec<Task>,
}

#[derive(Serialize)]
pub(crate) struct Empty {}

/// POST /api/task/create
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TaskCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<TaskPayload>>)> {
    let task = payload.into_task()?;
    let task = TaskRepository::new(state.get_db()).create(task).await?;
    Ok((
        StatusCode::CREATED,
        ok_with_message(TaskPayload { task }, "Task created successfully"),
    ))
}

/// GET /api/task/read
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<TaskListPayload>>> {
    let tasks = TaskRepository::new(state.get_db()).find_all().await?;
    Ok(ok(TaskListPayload { tasks }))
}

/// GET /api/task/get/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<TaskPayload>>> {
    let task = TaskRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Task {} not found", id)))?;
    Ok(ok(TaskPayload { task }))
}

/// PUT /api/task/update/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<TaskUpdate>,
) -> AppResult<Json<AppResponse<TaskPayload>>> {
    let task = TaskRepository::new(state.get_db()).update(&id, patch).await?;
    Ok(ok_with_message(
        TaskPayload { task },
        "Task updated successfully",
    ))
}

/// DELETE /api/task/delete/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Empty>>> {
    TaskRepository::new(state.get_db()).delete(&id).await?;
    Ok(ok_with_message(Empty {}, "Task deleted successfully"))
}
