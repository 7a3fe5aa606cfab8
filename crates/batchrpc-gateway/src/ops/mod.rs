//! Operational HTTP endpoints.
//!
//! - `/healthz`    : liveness
//! - `/v1/methods` : registered methods with their declared shapes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn methods(State(state): State<AppState>) -> impl IntoResponse {
    let methods = state.dispatcher().registry().describe();
    Json(json!({ "methods": methods }))
}
