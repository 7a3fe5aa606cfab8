//! Shared application state for the batchrpc gateway.
//!
//! Everything here is built once at startup (codec table, method registry,
//! dispatcher) and shared read-only across exchanges.

use std::sync::Arc;

use batchrpc_core::protocol::EncoderSelector;

use crate::config::GatewayConfig;
use crate::dispatch::{Dispatcher, MethodRegistry};
use crate::error::Result;
use crate::services;
use crate::transport::codec::CodecTable;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    dispatcher: Arc<Dispatcher>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    codecs: CodecTable,
}

impl AppState {
    /// Build application state with the built-in services registered.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let mut registry = MethodRegistry::new();
        services::register_builtin(&mut registry)?;
        Self::with_registry(cfg, registry)
    }

    /// Build application state around a caller-supplied registry.
    pub fn with_registry(cfg: GatewayConfig, registry: MethodRegistry) -> Result<Self> {
        let codecs = CodecTable::json2(&cfg.rpc.content_types)?;
        let dispatcher = Dispatcher::new(Arc::new(registry), cfg.rpc.on_dispatch_error);

        tracing::info!(
            methods = dispatcher.registry().len(),
            content_types = ?codecs.content_types(),
            mode = ?dispatcher.mode(),
            "rpc gateway state ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, codecs }),
            dispatcher: Arc::new(dispatcher),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn codecs(&self) -> &CodecTable {
        &self.inner.codecs
    }

    pub fn encoder_selector(&self) -> EncoderSelector {
        self.inner.cfg.rpc.compression
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }
}
