//! User API module
//!
//! Registration and reads are public; changing or removing an account needs
//! a valid token.

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/user", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    let public = Router::new()
        .route("/create", post(handler::create))
        .route("/read", get(handler::list))
        .route("/get/{id}", get(handler::get_by_id));

    let protected = Router::new()
        .route("/update/{id}", put(handler::update))
        .route("/delete/{id}", delete(handler::delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public.merge(protected)
}
