//! batchrpc core: transport-agnostic JSON-RPC 2.0 batch protocol.
//!
//! This crate defines the envelope model, the per-item decode contexts and the
//! codec that frames replies back into a single body. It carries no HTTP or
//! runtime dependencies so the gateway (or any other transport) can drive it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `RpcError`/`ErrorObject` so malformed bodies never crash the
//! process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ErrorCode, Result, RpcError};
