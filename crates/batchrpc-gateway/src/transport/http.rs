//! JSON-RPC over HTTP endpoint.
//!
//! Responsibilities:
//! - Reject non-POST (405) and unknown content types (415) as plain text
//! - Pick the codec and the output encoder for this exchange
//! - Hand the retained body to the dispatcher and write the framed reply

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::Instrument;

use crate::app_state::AppState;
use crate::context::RequestContext;

pub async fn rpc_endpoint(
    State(app): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        return plain_error(
            StatusCode::METHOD_NOT_ALLOWED,
            format!("rpc: POST method required, received {method}"),
        );
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let Some(codec) = app.codecs().lookup(&content_type) else {
        return plain_error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("rpc: unrecognized Content-Type: {content_type}"),
        );
    };

    let encoder = app.encoder_selector().select(
        headers
            .get(header::ACCEPT_ENCODING)
            .and_then(|v| v.to_str().ok()),
    );

    let ctx = RequestContext::new(headers, body);
    let span = tracing::info_span!("rpc.exchange", content_type = %content_type, body_len = ctx.raw_body().len());

    let dispatcher = app.dispatcher();
    let encoded = dispatcher
        .serve(codec.as_ref(), &ctx, encoder)
        .instrument(span)
        .await;

    match encoded {
        Ok(None) => {
            let mut resp = StatusCode::OK.into_response();
            resp.headers_mut()
                .insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
            resp
        }
        Ok(Some(out)) => {
            let mut resp = (StatusCode::OK, out).into_response();
            let h = resp.headers_mut();
            h.insert(header::CONTENT_TYPE, HeaderValue::from_static(codec.content_type()));
            h.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
            if let Some(enc) = encoder.content_encoding() {
                h.insert(header::CONTENT_ENCODING, HeaderValue::from_static(enc));
            }
            resp
        }
        Err(e) => {
            tracing::error!(error = %e, "encode response failed");
            plain_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Plain-text transport error.
pub fn plain_error(status: StatusCode, msg: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        msg,
    )
        .into_response()
}
