//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`orders`] - order lifecycle, stats and CSV export
//! - [`users`] - customer accounts
//! - [`employees`] - staff management and sign-in
//! - [`inventory`] - cylinder catalog
//! - [`drivers`] - delivery fleet
//! - [`tasks`] - delivery assignments

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub mod drivers;
pub mod employees;
pub mod health;
pub mod inventory;
pub mod orders;
pub mod tasks;
pub mod users;

/// Build a router with all routes registered (no outer middleware, no state)
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(users::router(state))
        .merge(employees::router(state))
        .merge(inventory::router(state))
        .merge(drivers::router(state))
        .merge(tasks::router(state))
}

/// Build the fully configured application: routes, CORS, request tracing.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router(state)
        .layer(cors_layer(&state.config.cors_origin))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!(origin, "Invalid CORS_ORIGIN, falling back to permissive");
            CorsLayer::permissive()
        }
    }
}
