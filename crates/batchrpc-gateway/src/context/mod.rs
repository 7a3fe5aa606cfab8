//! Per-exchange context handed to method handlers.

pub mod request;

pub use request::RequestContext;
