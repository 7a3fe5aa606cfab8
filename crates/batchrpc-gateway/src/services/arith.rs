use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use batchrpc_core::error::{Result, RpcError};

use crate::context::RequestContext;
use crate::dispatch::RpcMethod;

/// Application error code for integer overflow (server-defined range).
pub const OVERFLOW_CODE: i64 = -32001;

#[derive(Debug, Deserialize)]
pub struct Operands {
    pub a: i64,
    pub b: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quotient {
    pub quo: i64,
    pub rem: i64,
}

/// `Arith.Add`: checked `a + b`.
#[derive(Debug, Default)]
pub struct ArithAdd;

#[async_trait]
impl RpcMethod for ArithAdd {
    type Args = Operands;
    type Reply = i64;

    async fn call(&self, _ctx: &RequestContext, args: Operands) -> Result<i64> {
        args.a
            .checked_add(args.b)
            .ok_or_else(|| RpcError::with_code(OVERFLOW_CODE, "integer overflow"))
    }
}

/// `Arith.Divide`: `a / b` with remainder.
#[derive(Debug, Default)]
pub struct ArithDivide;

#[async_trait]
impl RpcMethod for ArithDivide {
    type Args = Operands;
    type Reply = Quotient;

    async fn call(&self, _ctx: &RequestContext, args: Operands) -> Result<Quotient> {
        if args.b == 0 {
            return Err(RpcError::Server("divide by zero".into()));
        }
        match (args.a.checked_div(args.b), args.a.checked_rem(args.b)) {
            (Some(quo), Some(rem)) => Ok(Quotient { quo, rem }),
            _ => Err(RpcError::with_code(OVERFLOW_CODE, "integer overflow")),
        }
    }
}
