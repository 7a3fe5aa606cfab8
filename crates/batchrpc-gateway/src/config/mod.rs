//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use crate::error::Result;

pub use schema::{GatewayConfig, GatewaySection, RpcSection};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "BATCHRPC_CONFIG";
/// Config file used when `BATCHRPC_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "batchrpc.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Path from `BATCHRPC_CONFIG`, falling back to `batchrpc.yaml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}
