use std::sync::Arc;

use serde::Deserialize;

use batchrpc_core::error::{ErrorCode, Result, RpcError};
use batchrpc_core::protocol::{BatchItem, Codec, Encoder, Reply};

use crate::context::RequestContext;
use crate::dispatch::registry::MethodRegistry;

/// What to do with the rest of a batch after a dispatch-time failure
/// (method resolution or argument read).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchErrorMode {
    /// Answer every item; failures stay per-item.
    #[default]
    Isolate,
    /// Legacy behaviour: the first failure abandons the exchange. Nothing is
    /// written, not even replies already produced.
    Halt,
}

enum Step {
    /// Item answered (success, decode error or handler error).
    Replied(Reply),
    /// Item failed before its handler ran.
    Failed(Reply),
}

/// Drives one exchange: decode, per-item dispatch in order, encode.
pub struct Dispatcher {
    registry: Arc<MethodRegistry>,
    mode: DispatchErrorMode,
}

impl Dispatcher {
    pub fn new(registry: Arc<MethodRegistry>, mode: DispatchErrorMode) -> Self {
        Self { registry, mode }
    }

    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    pub fn mode(&self) -> DispatchErrorMode {
        self.mode
    }

    /// Run the whole pipeline over the context's retained body and return the
    /// encoded response body. A parse error becomes a single error envelope.
    ///
    /// `None` means the exchange was halted and no body must be written.
    pub async fn serve(
        &self,
        codec: &dyn Codec,
        ctx: &RequestContext,
        encoder: Encoder,
    ) -> Result<Option<Vec<u8>>> {
        let replies = match codec.decode(ctx.raw_body().clone(), encoder) {
            Ok(items) => match self.dispatch(ctx, items).await {
                Some(replies) => replies,
                None => return Ok(None),
            },
            Err(parse) => {
                tracing::warn!(error = %parse.message, "request body parse failed");
                vec![Reply::parse_error(parse)]
            }
        };
        codec.encode(replies, encoder).map(Some)
    }

    /// Process items sequentially; replies come back in input order.
    /// Notifications keep their slot here and are dropped by the codec.
    ///
    /// Returns `None` when `Halt` mode abandons the batch.
    pub async fn dispatch(&self, ctx: &RequestContext, items: Vec<BatchItem>) -> Option<Vec<Reply>> {
        let mut replies = Vec::with_capacity(items.len());
        for mut item in items {
            match self.dispatch_item(ctx, &mut item).await {
                Step::Replied(reply) => replies.push(reply),
                Step::Failed(reply) => {
                    if self.mode == DispatchErrorMode::Halt {
                        tracing::warn!(
                            index = item.index(),
                            answered = replies.len(),
                            "dispatch failed, halting batch"
                        );
                        return None;
                    }
                    replies.push(reply);
                }
            }
        }
        Some(replies)
    }

    async fn dispatch_item(&self, ctx: &RequestContext, item: &mut BatchItem) -> Step {
        let index = item.index();

        if let Some(err) = item.decode_error() {
            tracing::debug!(index, code = err.code, "item rejected at decode");
            return Step::Replied(item.error_reply(RpcError::Object(err.clone())));
        }

        let method = match item.method() {
            Ok(m) => m.to_owned(),
            Err(e) => return Step::Failed(item.error_reply(e)),
        };
        tracing::debug!(index, method = %method, "dispatching item");

        let entry = match self.registry.resolve(&method) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(index, method = %method, "method not found");
                return Step::Failed(item.error_reply(e));
            }
        };

        let pending = match entry.prepare(ctx, item) {
            Ok(fut) => fut,
            Err(e) => {
                tracing::debug!(index, method = %method, error = %e, "argument read failed");
                return Step::Failed(item.error_reply(e));
            }
        };

        match pending.await {
            Ok(result) => Step::Replied(item.success_reply(result)),
            Err(e) => {
                tracing::debug!(
                    index,
                    method = %method,
                    code = e.code(),
                    kind = e.kind().map_or("APPLICATION_ERROR", ErrorCode::as_str),
                    "handler returned error"
                );
                Step::Replied(item.error_reply(e))
            }
        }
    }
}
