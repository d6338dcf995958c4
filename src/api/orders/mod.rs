//! Order API module
//!
//! The storefront places orders without an account, so none of these routes
//! require authentication. A valid bearer token, when present, is still
//! picked up to attribute audit entries.

mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/order", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/create", post(handler::create))
        .route("/", get(handler::list))
        .route("/stats", get(handler::stats))
        .route("/export", get(handler::export))
        .route("/user/{user_id}", get(handler::by_user))
        .route("/order-id/{order_id}", get(handler::get_by_order_id))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}", put(handler::update))
        .route("/{id}/status", patch(handler::update_status))
        .route("/{id}", delete(handler::delete))
}
