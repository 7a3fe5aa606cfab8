//! JSON-RPC 2.0 batch protocol.
//!
//! - `envelope`: wire records (request, response, error object).
//! - `item`: one decoded request unit plus the reply it produces.
//! - `codec`: body <-> items/replies, single vs. array framing.
//! - `encoding`: per-exchange output encoders (compression).
//!
//! Parsers are panic-free: malformed input is reported as an error object,
//! never by panicking or indexing raw buffers.

pub mod codec;
pub mod encoding;
pub mod envelope;
pub mod item;

pub use codec::{Codec, Json2Codec};
pub use encoding::{Encoder, EncoderSelector};
pub use envelope::{ErrorObject, Request, Response, VERSION};
pub use item::{BatchItem, Reply};
