//! Content-type -> codec table.
//!
//! Populated once at startup and shared read-only afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use batchrpc_core::protocol::{Codec, Json2Codec};

use crate::error::{GatewayError, Result};

#[derive(Default, Clone)]
pub struct CodecTable {
    by_type: HashMap<String, Arc<dyn Codec>>,
}

impl CodecTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table serving the JSON-RPC 2.0 codec under each given content type.
    pub fn json2(content_types: &[String]) -> Result<Self> {
        let mut table = Self::new();
        let codec: Arc<dyn Codec> = Arc::new(Json2Codec::new());
        for ct in content_types {
            table.register(ct, Arc::clone(&codec))?;
        }
        Ok(table)
    }

    /// Register `codec` for a bare media type (matched case-insensitively).
    pub fn register(&mut self, content_type: &str, codec: Arc<dyn Codec>) -> Result<()> {
        let key = content_type.trim().to_ascii_lowercase();
        if self.by_type.contains_key(&key) {
            return Err(GatewayError::DuplicateCodec(key));
        }
        self.by_type.insert(key, codec);
        Ok(())
    }

    /// Look up a codec from a `Content-Type` header value, ignoring any
    /// `;charset=...` suffix.
    pub fn lookup(&self, header: &str) -> Option<Arc<dyn Codec>> {
        self.by_type.get(&media_type(header)).cloned()
    }

    pub fn content_types(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.by_type.keys().map(String::as_str).collect();
        out.sort_unstable();
        out
    }
}

/// `Application/JSON; charset=utf-8` -> `application/json`.
pub fn media_type(header: &str) -> String {
    let bare = match header.split_once(';') {
        Some((mt, _params)) => mt,
        None => header,
    };
    bare.trim().to_ascii_lowercase()
}
