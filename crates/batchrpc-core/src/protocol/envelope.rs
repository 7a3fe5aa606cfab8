//! JSON-RPC 2.0 envelopes.
//!
//! `params`, `result`, `id` and `data` are kept as `RawValue` so the core never
//! interprets them: ids are echoed verbatim and params are decoded lazily into
//! whatever shape the resolved method declares.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

/// Protocol version literal every request must carry.
pub const VERSION: &str = "2.0";

/// Request envelope, borrowed from the request body.
///
/// `id: null` and a missing `id` both decode to `None` (notification).
#[derive(Debug, Deserialize)]
pub struct Request<'a> {
    /// Protocol version (`jsonrpc` on the wire).
    #[serde(rename = "jsonrpc", default)]
    pub version: String,
    /// Dotted method name, e.g. `Echo.Say`.
    pub method: String,
    /// Raw params, decoded later against the method's argument shape.
    #[serde(borrow, default)]
    pub params: Option<&'a RawValue>,
    /// Raw request id, echoed back untouched.
    #[serde(borrow, default)]
    pub id: Option<&'a RawValue>,
}

/// Best-effort id recovery for elements that are not valid envelopes.
#[derive(Debug, Deserialize)]
pub(crate) struct IdProbe<'a> {
    #[serde(borrow, default)]
    pub id: Option<&'a RawValue>,
}

/// Response envelope. Exactly one of `result`/`error` is set; the other is
/// omitted from the wire form. `id` is always written (`null` when unknown).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Protocol version (`jsonrpc` on the wire).
    #[serde(rename = "jsonrpc")]
    pub version: String,
    /// `None` only when the field is absent; `"result": null` decodes to a
    /// raw `null`.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub result: Option<Box<RawValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
    #[serde(default)]
    pub id: Option<Box<RawValue>>,
}

impl Response {
    /// Successful response echoing `id`.
    pub fn success(id: Option<Box<RawValue>>, result: Box<RawValue>) -> Self {
        Self {
            version: VERSION.to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Error response echoing `id`.
    pub fn failure(id: Option<Box<RawValue>>, error: ErrorObject) -> Self {
        Self {
            version: VERSION.to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

fn present<'de, D>(de: D) -> Result<Option<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Box::<RawValue>::deserialize(de).map(Some)
}

/// JSON-RPC error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorObject {
    /// Numeric error code.
    pub code: i64,
    /// Short description.
    pub message: String,
    /// Optional structured data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Box<RawValue>>,
}

impl ErrorObject {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Attach raw JSON as `data`.
    pub fn with_data(mut self, data: Box<RawValue>) -> Self {
        self.data = Some(data);
        self
    }
}
