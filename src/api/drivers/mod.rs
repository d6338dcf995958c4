//! Driver API module (admin-only)

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::auth::{require_admin, require_auth};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/driver", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/create", post(handler::create))
        .route("/read", get(handler::list))
        .route("/get/{id}", get(handler::get_by_id))
        .route("/update/{id}", put(handler::update))
        .route("/delete/{id}", delete(handler::delete))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
