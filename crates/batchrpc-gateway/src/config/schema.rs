use std::collections::HashSet;
use std::net::SocketAddr;

use serde::Deserialize;

use batchrpc_core::protocol::EncoderSelector;

use crate::dispatch::DispatchErrorMode;
use crate::error::{GatewayError, Result};

const MIN_BODY_BYTES: usize = 2;
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub rpc: RpcSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GatewayError::UnsupportedVersion(self.version));
        }

        self.gateway.validate()?;
        self.rpc.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            rpc_path: default_rpc_path(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.rpc_path.starts_with('/') {
            return Err(GatewayError::InvalidConfig(
                "gateway.rpc_path must start with '/'".into(),
            ));
        }
        if !(MIN_BODY_BYTES..=MAX_BODY_BYTES).contains(&self.max_body_bytes) {
            return Err(GatewayError::InvalidConfig(format!(
                "gateway.max_body_bytes must be between {MIN_BODY_BYTES} and {MAX_BODY_BYTES}"
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            GatewayError::InvalidConfig(format!("gateway.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_rpc_path() -> String {
    "/rpc".into()
}
fn default_max_body_bytes() -> usize {
    1024 * 1024
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RpcSection {
    /// Request content types served by the JSON-RPC 2.0 codec.
    #[serde(default = "default_content_types")]
    pub content_types: Vec<String>,

    #[serde(default)]
    pub compression: EncoderSelector,

    #[serde(default)]
    pub on_dispatch_error: DispatchErrorMode,
}

impl Default for RpcSection {
    fn default() -> Self {
        Self {
            content_types: default_content_types(),
            compression: EncoderSelector::default(),
            on_dispatch_error: DispatchErrorMode::default(),
        }
    }
}

impl RpcSection {
    pub fn validate(&self) -> Result<()> {
        if self.content_types.is_empty() {
            return Err(GatewayError::InvalidConfig(
                "rpc.content_types must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for ct in &self.content_types {
            if ct.trim().is_empty() || ct.contains(';') {
                return Err(GatewayError::InvalidConfig(format!(
                    "rpc.content_types entry must be a bare media type: {ct:?}"
                )));
            }
            if !seen.insert(ct.trim().to_ascii_lowercase()) {
                return Err(GatewayError::DuplicateCodec(ct.clone()));
            }
        }
        Ok(())
    }
}

fn default_content_types() -> Vec<String> {
    vec!["application/json".into()]
}
