//! Batch items (one decoded request unit) and the replies they produce.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::error::{ErrorCode, Result, RpcError};
use crate::protocol::encoding::Encoder;
use crate::protocol::envelope::{ErrorObject, Response};

/// One request unit of an exchange.
///
/// Holds zero-copy views into the retained body: `raw` is this item's own
/// element and `params` its params slice. `err` is set at most once and never
/// cleared; once set, every later stage yields an error reply.
#[derive(Debug)]
pub struct BatchItem {
    index: usize,
    body: Bytes,
    raw: Bytes,
    method: String,
    params: Option<Bytes>,
    id: Option<Box<RawValue>>,
    notification: bool,
    err: Option<ErrorObject>,
    encoder: Encoder,
}

impl BatchItem {
    pub(crate) fn new(
        index: usize,
        body: Bytes,
        raw: Bytes,
        method: String,
        params: Option<Bytes>,
        id: Option<Box<RawValue>>,
        encoder: Encoder,
    ) -> Self {
        let notification = id.is_none();
        Self {
            index,
            body,
            raw,
            method,
            params,
            id,
            notification,
            err: None,
            encoder,
        }
    }

    /// Item for an element that did not decode as an envelope. It always gets
    /// a reply, even without a recoverable id.
    pub(crate) fn malformed(
        index: usize,
        body: Bytes,
        raw: Bytes,
        id: Option<Box<RawValue>>,
        err: ErrorObject,
        encoder: Encoder,
    ) -> Self {
        Self {
            index,
            body,
            raw,
            method: String::new(),
            params: None,
            id,
            notification: false,
            err: Some(err),
            encoder,
        }
    }

    pub(crate) fn fail(&mut self, err: ErrorObject) {
        if self.err.is_none() {
            self.err = Some(err);
        }
    }

    /// Position in the request (0 for a single request).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Dotted method name, or the stored decode error.
    pub fn method(&self) -> Result<&str> {
        match &self.err {
            Some(err) => Err(RpcError::Object(err.clone())),
            None => Ok(&self.method),
        }
    }

    /// Decode `params` into the caller's argument shape.
    ///
    /// A failure is recorded on the item, so later calls return the same error.
    pub fn read_args<T: DeserializeOwned>(&mut self) -> Result<T> {
        if let Some(err) = &self.err {
            return Err(RpcError::Object(err.clone()));
        }
        let Some(params) = &self.params else {
            let err = ErrorObject::new(
                ErrorCode::InvalidRequest.code(),
                "rpc: method request ill-formed: missing params field",
            );
            self.fail(err.clone());
            return Err(RpcError::Object(err));
        };
        match serde_json::from_slice::<T>(params) {
            Ok(args) => Ok(args),
            Err(e) => {
                let mut err = ErrorObject::new(ErrorCode::InvalidParams.code(), e.to_string());
                if let Some(data) = raw_json(params) {
                    err = err.with_data(data);
                }
                self.fail(err.clone());
                Err(RpcError::Object(err))
            }
        }
    }

    /// Success reply bound to this item's id.
    pub fn success_reply(&self, result: Box<RawValue>) -> Reply {
        Reply {
            response: Response::success(self.id.clone(), result),
            notification: self.notification,
        }
    }

    /// Error reply bound to this item's id.
    pub fn error_reply(&self, err: RpcError) -> Reply {
        Reply {
            response: Response::failure(self.id.clone(), err.into_error_object()),
            notification: self.notification,
        }
    }

    /// The whole, unmodified request body.
    pub fn raw_body(&self) -> &Bytes {
        &self.body
    }

    /// This item's own slice of the body.
    pub fn raw(&self) -> &Bytes {
        &self.raw
    }

    pub fn decode_error(&self) -> Option<&ErrorObject> {
        self.err.as_ref()
    }

    pub fn id(&self) -> Option<&RawValue> {
        self.id.as_deref()
    }

    pub fn is_notification(&self) -> bool {
        self.notification
    }

    /// Output encoder selected for this exchange.
    pub fn encoder(&self) -> Encoder {
        self.encoder
    }
}

/// A produced response, tagged with whether it must be written out.
#[derive(Debug, Clone)]
pub struct Reply {
    response: Response,
    notification: bool,
}

impl Reply {
    /// Exchange-level parse failure; always written, with `id: null`.
    pub fn parse_error(err: ErrorObject) -> Self {
        Self {
            response: Response::failure(None, err),
            notification: false,
        }
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn into_response(self) -> Response {
        self.response
    }

    /// Notifications occupy a slot during dispatch but are never encoded.
    pub fn is_notification(&self) -> bool {
        self.notification
    }
}

/// Copy a body slice into an owned raw JSON value.
pub(crate) fn raw_json(bytes: &[u8]) -> Option<Box<RawValue>> {
    let s = std::str::from_utf8(bytes).ok()?;
    RawValue::from_string(s.to_owned()).ok()
}
