//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use crate::auth::{CurrentUser, MaybeUser};
use crate::core::ServerState;
use crate::db::models::{
    AuditAction, AuditActorType, AuditRecord, Order, OrderCreate, OrderStatus, OrderUpdate,
    UserSummary,
};
use crate::db::repository::{AuditRepository, OrderRepository, UserRepository, order::OrderStats};
use crate::orders::{OrderListQuery, Pagination, generate_order_id, orders_to_csv, paging};
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};

/// Order plus the related user's name/email, when the reference resolves
#[derive(Serialize)]
pub(crate) struct OrderView {
    #[serde(flatten)]
    order: Order,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserSummary>,
}

#[derive(Serialize)]
pub(crate) struct OrderPayload {
    order: OrderView,
}

#[derive(Serialize)]
pub(crate) struct OrderListPayload {
    orders: Vec<OrderView>,
    pagination: Pagination,
}

async fn with_users(state: &ServerState, orders: Vec<Order>) -> AppResult<Vec<OrderView>> {
    let ids: Vec<surrealdb::RecordId> =
        orders.iter().filter_map(|o| o.user_id.clone()).collect();
    let summaries = UserRepository::new(state.get_db()).find_summaries(ids).await?;
    let by_id: HashMap<String, UserSummary> = summaries
        .into_iter()
        .map(|u| (u.id.to_string(), u))
        .collect();

    Ok(orders
        .into_iter()
        .map(|order| {
            let user = order
                .user_id
                .as_ref()
                .and_then(|id| by_id.get(&id.to_string()).cloned());
            OrderView { order, user }
        })
        .collect())
}

async fn with_user(state: &ServerState, order: Order) -> AppResult<OrderView> {
    let user = match order.user_id.as_ref() {
        Some(id) => UserRepository::new(state.get_db())
            .find_summaries(vec![id.clone()])
            .await?
            .into_iter()
            .next(),
        None => None,
    };
    Ok(OrderView { order, user })
}

#[derive(Serialize)]
pub(crate) struct StatsPayload {
    stats: OrderStats,
}

#[derive(Serialize)]
pub(crate) struct Empty {}

#[derive(Deserialize)]
pub(crate) struct StatusBody {
    status: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct PageParams {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_page() -> u32 {
    paging::DEFAULT_PAGE
}

fn default_limit() -> u32 {
    paging::DEFAULT_LIMIT
}

fn actor_type(user: &Option<CurrentUser>) -> AuditActorType {
    match user {
        Some(u) if u.is_admin() => AuditActorType::Admin,
        Some(_) => AuditActorType::User,
        None => AuditActorType::User,
    }
}

/// POST /api/order/create
pub async fn create(
    State(state): State<ServerState>,
    MaybeUser(user): MaybeUser,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<OrderPayload>>)> {
    let order = payload.into_order(generate_order_id(), Utc::now())?;
    let order = OrderRepository::new(state.get_db()).create(order).await?;

    AuditRepository::new(state.get_db())
        .record(AuditRecord {
            id: None,
            order_id: order.order_id.clone(),
            action: AuditAction::Create,
            user_type: actor_type(&user),
            changes: None,
            previous_data: None,
            new_data: serde_json::to_value(&order).ok(),
            timestamp: Utc::now(),
        })
        .await;

    Ok((
        StatusCode::CREATED,
        ok_with_message(
            OrderPayload {
                order: OrderView { order, user: None },
            },
            "Order created successfully",
        ),
    ))
}

/// GET /api/order
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<AppResponse<OrderListPayload>>> {
    let status = query.status_filter()?;
    let (orders, total) = OrderRepository::new(state.get_db())
        .list(&query, status)
        .await?;

    let pagination = Pagination::compute(query.page, query.limit, orders.len(), total);
    let orders = with_users(&state, orders).await?;
    Ok(ok(OrderListPayload { orders, pagination }))
}

/// GET /api/order/stats
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<AppResponse<StatsPayload>>> {
    let stats = OrderRepository::new(state.get_db()).stats().await?;
    Ok(ok(StatsPayload { stats }))
}

/// GET /api/order/export
///
/// Same filters as the listing, no pagination, rendered as CSV.
pub async fn export(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Response> {
    let status = query.status_filter()?;
    let orders = OrderRepository::new(state.get_db())
        .export(&query, status)
        .await?;

    let csv = orders_to_csv(&orders);
    let filename = format!("orders-export-{}.csv", Utc::now().format("%Y-%m-%d"));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}

/// GET /api/order/user/:user_id
pub async fn by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<AppResponse<OrderListPayload>>> {
    let (orders, total) = OrderRepository::new(state.get_db())
        .find_by_user(&user_id, params.page, params.limit)
        .await?;

    let pagination = Pagination::compute(params.page, params.limit, orders.len(), total);
    let orders = with_users(&state, orders).await?;
    Ok(ok(OrderListPayload { orders, pagination }))
}

/// GET /api/order/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<OrderPayload>>> {
    let order = OrderRepository::new(state.get_db())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    let order = with_user(&state, order).await?;
    Ok(ok(OrderPayload { order }))
}

/// GET /api/order/order-id/:order_id
pub async fn get_by_order_id(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<AppResponse<OrderPayload>>> {
    let order = OrderRepository::new(state.get_db())
        .find_by_order_id(&order_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;
    let order = with_user(&state, order).await?;
    Ok(ok(OrderPayload { order }))
}

/// PUT /api/order/:id
pub async fn update(
    State(state): State<ServerState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
    Json(patch): Json<OrderUpdate>,
) -> AppResult<Json<AppResponse<OrderPayload>>> {
    if patch.is_empty() {
        return Err(AppError::validation("No fields to update"));
    }

    let repo = OrderRepository::new(state.get_db());
    let previous = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    let changes = serde_json::to_value(&patch).ok();
    let order = repo.update(&id, patch).await?;

    AuditRepository::new(state.get_db())
        .record(AuditRecord {
            id: None,
            order_id: order.order_id.clone(),
            action: AuditAction::Update,
            user_type: actor_type(&user),
            changes,
            previous_data: serde_json::to_value(&previous).ok(),
            new_data: serde_json::to_value(&order).ok(),
            timestamp: Utc::now(),
        })
        .await;

    let order = with_user(&state, order).await?;
    Ok(ok_with_message(
        OrderPayload { order },
        "Order updated successfully",
    ))
}

/// PATCH /api/order/:id/status
pub async fn update_status(
    State(state): State<ServerState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> AppResult<Json<AppResponse<OrderPayload>>> {
    let status: OrderStatus = body
        .status
        .as_deref()
        .ok_or_else(|| AppError::validation("status is required"))?
        .parse()?;

    let repo = OrderRepository::new(state.get_db());
    let previous = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    let order = repo.update_status(&id, status).await?;

    let action = if status == OrderStatus::Cancelled {
        AuditAction::Cancel
    } else {
        AuditAction::StatusChange
    };
    AuditRepository::new(state.get_db())
        .record(AuditRecord {
            id: None,
            order_id: order.order_id.clone(),
            action,
            user_type: actor_type(&user),
            changes: Some(serde_json::json!({
                "from": previous.status.as_str(),
                "to": status.as_str(),
            })),
            previous_data: None,
            new_data: None,
            timestamp: Utc::now(),
        })
        .await;

    let order = with_user(&state, order).await?;
    Ok(ok_with_message(
        OrderPayload { order },
        "Order status updated successfully",
    ))
}

/// DELETE /api/order/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Empty>>> {
    OrderRepository::new(state.get_db()).delete(&id).await?;
    Ok(ok_with_message(Empty {}, "Order deleted successfully"))
}
