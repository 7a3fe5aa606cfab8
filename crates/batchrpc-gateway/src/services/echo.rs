use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use batchrpc_core::error::Result;

use crate::context::RequestContext;
use crate::dispatch::RpcMethod;

/// `Echo.Say`: returns the message it was given.
#[derive(Debug, Default)]
pub struct EchoSay;

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EchoMsg {
    #[serde(default)]
    pub msg: String,
}

#[async_trait]
impl RpcMethod for EchoSay {
    type Args = EchoMsg;
    type Reply = EchoMsg;

    async fn call(&self, _ctx: &RequestContext, args: EchoMsg) -> Result<EchoMsg> {
        Ok(args)
    }
}
