//! Transport layer (HTTP).
//!
//! Exposes the JSON-RPC POST handler and the content-type -> codec table used
//! to pick a codec before the body is decoded.

pub mod codec;
pub mod http;
