//! Startup-time errors for the gateway (config, registries).
//!
//! Per-request failures never use this type; they become JSON-RPC error
//! envelopes (`RpcError`) or plain-text transport errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("read config failed: {0}")]
    ConfigRead(#[from] std::io::Error),
    #[error("invalid yaml: {0}")]
    ConfigYaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("invalid method name: {0} (expected Service.Method)")]
    InvalidMethodName(String),
    #[error("method already registered: {0}")]
    DuplicateMethod(String),
    #[error("codec already registered for content type: {0}")]
    DuplicateCodec(String),
}
