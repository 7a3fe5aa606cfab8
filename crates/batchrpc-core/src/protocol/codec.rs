//! Body codec: request body -> batch items, replies -> response body.
//!
//! Decoding happens in two passes. The top level is parsed into borrowed
//! `RawValue`s (syntax only); a failure there is exchange-fatal. Each element
//! is then decoded on its own, so one bad element never aborts its siblings.

use bytes::Bytes;
use serde_json::value::RawValue;

use crate::error::{ErrorCode, Result, RpcError};
use crate::protocol::encoding::Encoder;
use crate::protocol::envelope::{ErrorObject, IdProbe, Request, Response, VERSION};
use crate::protocol::item::{BatchItem, Reply};

/// Shortest body that can hold an envelope (`{}` / `[]`).
const MIN_BODY_LEN: usize = 2;

/// A wire format bound to the envelope model.
pub trait Codec: Send + Sync {
    /// Value for the response `Content-Type` header.
    fn content_type(&self) -> &'static str;

    /// Split a request body into ordered batch items.
    ///
    /// `Err` is an exchange-fatal parse error; per-item failures are stored on
    /// the items instead.
    fn decode(&self, body: Bytes, encoder: Encoder) -> std::result::Result<Vec<BatchItem>, ErrorObject>;

    /// Serialize ordered replies, dropping notifications.
    fn encode(&self, replies: Vec<Reply>, encoder: Encoder) -> Result<Vec<u8>>;
}

/// JSON-RPC 2.0 codec with batch support.
#[derive(Debug, Default, Clone, Copy)]
pub struct Json2Codec;

impl Json2Codec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for Json2Codec {
    fn content_type(&self) -> &'static str {
        "application/json; charset=utf-8"
    }

    fn decode(&self, body: Bytes, encoder: Encoder) -> std::result::Result<Vec<BatchItem>, ErrorObject> {
        decode_body(body, encoder)
    }

    fn encode(&self, replies: Vec<Reply>, encoder: Encoder) -> Result<Vec<u8>> {
        encode_replies(replies, encoder)
    }
}

/// Decode a JSON-RPC body (single object or array) into batch items.
pub fn decode_body(body: Bytes, encoder: Encoder) -> std::result::Result<Vec<BatchItem>, ErrorObject> {
    let trimmed = trim_ascii_ws(&body);
    if trimmed.len() < MIN_BODY_LEN {
        return Ok(Vec::new());
    }
    let batch = trimmed.first() == Some(&b'[');

    let elements: Vec<&RawValue> = if batch {
        serde_json::from_slice::<Vec<&RawValue>>(&body)
    } else {
        serde_json::from_slice::<&RawValue>(&body).map(|v| vec![v])
    }
    .map_err(|e| ErrorObject::new(ErrorCode::ParseError.code(), e.to_string()))?;

    let items: Vec<BatchItem> = elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| decode_element(index, &body, element, encoder))
        .collect();

    tracing::debug!(items = items.len(), batch, "decoded request body");
    Ok(items)
}

fn decode_element(index: usize, body: &Bytes, element: &RawValue, encoder: Encoder) -> BatchItem {
    // `element` borrows from `body`, so slice_ref stays in bounds.
    let raw = body.slice_ref(element.get().as_bytes());

    match serde_json::from_str::<Request>(element.get()) {
        Ok(req) => {
            let params = req.params.map(|p| body.slice_ref(p.get().as_bytes()));
            let id = req.id.map(ToOwned::to_owned);
            let mut item = BatchItem::new(index, body.clone(), raw, req.method, params, id, encoder);
            if req.version != VERSION {
                item.fail(
                    ErrorObject::new(
                        ErrorCode::InvalidRequest.code(),
                        format!("jsonrpc must be {VERSION}"),
                    )
                    .with_data(element.to_owned()),
                );
            }
            item
        }
        Err(e) => {
            let id = serde_json::from_str::<IdProbe>(element.get())
                .ok()
                .and_then(|probe| probe.id)
                .map(ToOwned::to_owned);
            let err = ErrorObject::new(
                ErrorCode::InvalidRequest.code(),
                format!("invalid request object: {e}"),
            )
            .with_data(element.to_owned());
            BatchItem::malformed(index, body.clone(), raw, id, err, encoder)
        }
    }
}

/// Encode replies: one remaining reply is written bare, anything else
/// (including none) as an array, in input order.
pub fn encode_replies(replies: Vec<Reply>, encoder: Encoder) -> Result<Vec<u8>> {
    let responses: Vec<Response> = replies
        .into_iter()
        .filter(|r| !r.is_notification())
        .map(Reply::into_response)
        .collect();

    let json = match responses.as_slice() {
        [single] => serde_json::to_vec(single),
        all => serde_json::to_vec(all),
    }
    .map_err(|e| RpcError::Internal(format!("encode response failed: {e}")))?;

    encoder
        .encode(json)
        .map_err(|e| RpcError::Internal(format!("compress response failed: {e}")))
}

fn trim_ascii_ws(buf: &[u8]) -> &[u8] {
    let start = buf
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(buf.len());
    let end = buf
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    buf.get(start..end).unwrap_or_default()
}
