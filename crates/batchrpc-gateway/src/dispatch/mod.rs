//! Dispatcher module exports.
//!
//! Re-exports the dispatcher, the method registry and the handler trait so
//! downstream consumers can depend on this module directly.

pub mod dispatcher;
pub mod registry;

pub use dispatcher::{DispatchErrorMode, Dispatcher};
pub use registry::{MethodEntry, MethodInfo, MethodRegistry, RpcMethod};
