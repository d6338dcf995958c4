//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{InventoryItem, InventoryItemCreate, InventoryItemUpdate};
use crate::db::repository::InventoryRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

#[derive(Serialize)]
pub(crate) struct ItemPayload {
    item: InventoryItem,
}

#[derive(Serialize)]
pub(crate) struct ItemListPayload {
    items: Vec<InventoryItem>,
}

#[derive(Serialize)]
pub(crate) struct Empty {}

/// POST /api/inventory/create
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryItemCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<ItemPayload>>)> {
    let item = payload.into_item()?;
    let item = InventoryRepository::new(state.get_db()).create(item).await?;
    Ok((
        StatusCode::CREATED,
        ok_with_message(ItemPayload { item }, "Inventory item created successfully"),
    ))
}

/// GET /api/inventory/read
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<ItemListPayload>>> {
    let items = InventoryRepository::new(state.get_db()).find_all().await?;
    Ok(ok(ItemListPayload { items }))
}

/// GET /api/inventory/get/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<ItemPayload>>> {
    let item = InventoryRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Inventory item {} not found", id)))?;
    Ok(ok(ItemPayload { item }))
}

/// PUT /api/inventory/update/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<InventoryItemUpdate>,
) -> AppResult<Json<AppResponse<ItemPayload>>> {
    let item = InventoryRepository::new(state.get_db())
        .update(&id, patch)
        .await?;
    Ok(ok_with_message(
        ItemPayload { item },
        "Inventory item updated successfully",
    ))
}

/// DELETE /api/inventory/delete/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Empty>>> {
    InventoryRepository::new(state.get_db()).delete(&id).await?;
    Ok(ok_with_message(Empty {}, "Inventory item deleted successfully"))
}
