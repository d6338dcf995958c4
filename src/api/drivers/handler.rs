//! Driver API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Driver, DriverCreate, DriverUpdate};
use crate::db::repository::DriverRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

#[derive(Serialize)]
pub(crate) struct DriverPayload {
    driver: Driver,
}

#[derive(Serialize)]
pub(crate) struct DriverListPayload {
    drivers: Vec<Driver>,
}

#[derive(Serialize)]
pub(crate) struct Empty {}

/// POST /api/driver/create
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DriverCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<DriverPayload>>)> {
    let driver = payload.into_driver()?;
    let driver = DriverRepository::new(state.get_db()).create(driver).await?;
    Ok((
        StatusCode::CREATED,
        ok_with_message(DriverPayload { driver }, "Driver created successfully"),
    ))
}

/// GET /api/driver/read
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<DriverListPayload>>> {
    let drivers = DriverRepository::new(state.get_db()).find_all().await?;
    Ok(ok(DriverListPayload { drivers }))
}

/// GET /api/driver/get/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<DriverPayload>>> {
    let driver = DriverRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Driver {} not found", id)))?;
    Ok(ok(DriverPayload { driver }))
}

/// PUT /api/driver/update/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<DriverUpdate>,
) -> AppResult<Json<AppResponse<DriverPayload>>> {
    let driver = DriverRepository::new(state.get_db())
        .update(&id, patch)
        .await?;
    Ok(ok_with_message(
        DriverPayload { driver },
        "Driver updated successfully",
    ))
}

/// DELETE /api/driver/delete/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Empty>>> {
    DriverRepository::new(state.get_db()).delete(&id).await?;
    Ok(ok_with_message(Empty {}, "Driver deleted successfully"))
}
