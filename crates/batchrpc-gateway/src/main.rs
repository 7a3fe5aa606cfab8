//! batchrpc gateway binary.
//!
//! - Config from `BATCHRPC_CONFIG` (default `batchrpc.yaml`), strict parsing
//! - JSON-RPC 2.0 (single + batch) on `gateway.rpc_path`
//! - Log filter from `RUST_LOG`

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use batchrpc_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "batchrpc-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = config::config_path();
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;
    let rpc_path = cfg.gateway.rpc_path.clone();

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, %rpc_path, config = %path, "batchrpc-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
