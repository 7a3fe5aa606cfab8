//! batchrpc gateway library entry.
//!
//! This crate wires the HTTP transport, codec table, method registry,
//! dispatcher and built-in services into a JSON-RPC 2.0 batch server. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod ops;
pub mod router;
pub mod services;
pub mod transport;
