//! Axum router wiring.
//!
//! - `{rpc_path}` (default `/rpc`): JSON-RPC endpoint, any method (non-POST -> 405)
//! - `/healthz`, `/v1/methods`: operational endpoints

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let gw = &state.cfg().gateway;
    let rpc_path = gw.rpc_path.clone();
    let body_limit = gw.max_body_bytes;

    Router::new()
        .route(&rpc_path, any(transport::http::rpc_endpoint))
        .route("/healthz", get(ops::healthz))
        .route("/v1/methods", get(ops::methods))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
