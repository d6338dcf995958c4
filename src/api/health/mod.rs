//! Health check endpoint

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{AppResponse, ok};

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    version: &'static str,
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

/// GET /api/health
async fn health() -> Json<AppResponse<HealthPayload>> {
    ok(HealthPayload {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
