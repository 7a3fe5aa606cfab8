//! Static method registry.
//!
//! Methods are registered by dotted name before the server starts, each with
//! its declared argument and reply types. The table is read-only afterwards.

use std::any::type_name;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::value::RawValue;

use batchrpc_core::error::{Result, RpcError};
use batchrpc_core::protocol::BatchItem;

use crate::context::RequestContext;
use crate::error::GatewayError;

/// A remotely callable method with typed arguments and reply.
#[async_trait]
pub trait RpcMethod: Send + Sync + 'static {
    type Args: DeserializeOwned + Send;
    type Reply: Serialize + Send;

    async fn call(&self, ctx: &RequestContext, args: Self::Args) -> Result<Self::Reply>;
}

/// Type-erased method: argument decoding and invocation are separate steps so
/// the dispatcher can tell a read failure from a handler failure.
trait ErasedMethod: Send + Sync {
    fn prepare<'a>(
        &'a self,
        ctx: &'a RequestContext,
        item: &mut BatchItem,
    ) -> Result<BoxFuture<'a, Result<Box<RawValue>>>>;
}

struct Typed<M> {
    method: M,
}

impl<M: RpcMethod> ErasedMethod for Typed<M> {
    fn prepare<'a>(
        &'a self,
        ctx: &'a RequestContext,
        item: &mut BatchItem,
    ) -> Result<BoxFuture<'a, Result<Box<RawValue>>>> {
        let args: M::Args = item.read_args()?;
        let fut: BoxFuture<'a, Result<Box<RawValue>>> = Box::pin(async move {
            let reply = self.method.call(ctx, args).await?;
            serde_json::value::to_raw_value(&reply)
                .map_err(|e| RpcError::Internal(format!("encode reply failed: {e}")))
        });
        Ok(fut)
    }
}

/// Registered method plus its declared shapes.
#[derive(Clone)]
pub struct MethodEntry {
    name: String,
    args_shape: &'static str,
    reply_shape: &'static str,
    handler: Arc<dyn ErasedMethod>,
}

impl MethodEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decode the item's params into the declared argument type and return the
    /// pending invocation.
    pub fn prepare<'a>(
        &'a self,
        ctx: &'a RequestContext,
        item: &mut BatchItem,
    ) -> Result<BoxFuture<'a, Result<Box<RawValue>>>> {
        self.handler.prepare(ctx, item)
    }

    pub fn info(&self) -> MethodInfo {
        MethodInfo {
            name: self.name.clone(),
            args: self.args_shape,
            reply: self.reply_shape,
        }
    }
}

impl std::fmt::Debug for MethodEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodEntry")
            .field("name", &self.name)
            .field("args", &self.args_shape)
            .field("reply", &self.reply_shape)
            .finish()
    }
}

/// Discovery record for `GET /v1/methods`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodInfo {
    pub name: String,
    pub args: &'static str,
    pub reply: &'static str,
}

#[derive(Default)]
pub struct MethodRegistry {
    methods: HashMap<String, MethodEntry>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `method` under a dotted `Service.Method` name.
    pub fn register<M: RpcMethod>(&mut self, name: &str, method: M) -> crate::error::Result<()> {
        if !is_dotted_name(name) {
            return Err(GatewayError::InvalidMethodName(name.to_string()));
        }
        if self.methods.contains_key(name) {
            return Err(GatewayError::DuplicateMethod(name.to_string()));
        }
        let entry = MethodEntry {
            name: name.to_string(),
            args_shape: type_name::<M::Args>(),
            reply_shape: type_name::<M::Reply>(),
            handler: Arc::new(Typed { method }),
        };
        self.methods.insert(name.to_string(), entry);
        tracing::debug!(method = %name, "registered rpc method");
        Ok(())
    }

    /// Exact-name lookup.
    pub fn resolve(&self, name: &str) -> Result<&MethodEntry> {
        self.methods
            .get(name)
            .ok_or_else(|| RpcError::MethodNotFound(format!("rpc: can't find method {name}")))
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// All methods, sorted by name.
    pub fn describe(&self) -> Vec<MethodInfo> {
        let mut out: Vec<MethodInfo> = self.methods.values().map(MethodEntry::info).collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }
}

fn is_dotted_name(name: &str) -> bool {
    match name.split_once('.') {
        Some((svc, method)) => {
            !svc.is_empty()
                && !method.is_empty()
                && !method.contains('.')
                && !name.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Adapter turning an async closure into an [`RpcMethod`].
pub struct FnMethod<A, R, F> {
    f: F,
    _shape: PhantomData<fn(A) -> R>,
}

impl<A, R, F> FnMethod<A, R, F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            _shape: PhantomData,
        }
    }
}

#[async_trait]
impl<A, R, F, Fut> RpcMethod for FnMethod<A, R, F>
where
    A: DeserializeOwned + Send + 'static,
    R: Serialize + Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<R>> + Send + 'static,
{
    type Args = A;
    type Reply = R;

    async fn call(&self, _ctx: &RequestContext, args: A) -> Result<R> {
        (self.f)(args).await
    }
}
