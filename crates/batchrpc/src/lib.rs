//! Top-level facade crate for batchrpc.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use batchrpc_core::*;
}

pub mod gateway {
    pub use batchrpc_gateway::*;
}
