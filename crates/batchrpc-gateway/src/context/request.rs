use axum::http::HeaderMap;
use bytes::Bytes;

/// Exchange-local view of the HTTP request.
///
/// The body is the retained original (shared, not copied), so collaborators
/// such as an authorization check inside a handler can re-read it unchanged
/// after the codec has consumed it.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    headers: HeaderMap,
    body: Bytes,
}

impl RequestContext {
    pub fn new(headers: HeaderMap, body: Bytes) -> Self {
        Self { headers, body }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The unmodified request body.
    pub fn raw_body(&self) -> &Bytes {
        &self.body
    }
}
