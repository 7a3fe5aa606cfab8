//! Batch item argument decoding and reply construction.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;
use serde::Deserialize;
use serde_json::value::RawValue;

use batchrpc_core::protocol::codec::decode_body;
use batchrpc_core::protocol::{BatchItem, Encoder};
use batchrpc_core::{ErrorCode, RpcError};

#[derive(Debug, Deserialize)]
struct AddArgs {
    a: i64,
    b: i64,
}

fn single(body: &'static str) -> BatchItem {
    let mut items = decode_body(Bytes::from_static(body.as_bytes()), Encoder::Identity).unwrap();
    assert_eq!(items.len(), 1);
    items.remove(0)
}

#[test]
fn read_args_decodes_params() {
    let mut item = single(r#"{"jsonrpc":"2.0","method":"Arith.Add","params":{"a":2,"b":3},"id":1}"#);
    let args: AddArgs = item.read_args().unwrap();
    assert_eq!(args.a + args.b, 5);
    assert!(item.decode_error().is_none());
}

#[test]
fn missing_params_is_invalid_request_and_sticks() {
    let mut item = single(r#"{"jsonrpc":"2.0","method":"Arith.Add","id":1}"#);
    let err = item.read_args::<AddArgs>().unwrap_err();
    assert_eq!(err.kind(), Some(ErrorCode::InvalidRequest));

    // recorded once, never cleared
    assert_eq!(item.decode_error().unwrap().code, ErrorCode::InvalidRequest.code());
    assert!(item.method().is_err());
    let again = item.read_args::<serde_json::Value>().unwrap_err();
    assert_eq!(again.code(), ErrorCode::InvalidRequest.code());
}

#[test]
fn null_params_counts_as_missing() {
    let mut item = single(r#"{"jsonrpc":"2.0","method":"Arith.Add","params":null,"id":1}"#);
    let err = item.read_args::<AddArgs>().unwrap_err();
    assert_eq!(err.kind(), Some(ErrorCode::InvalidRequest));
}

#[test]
fn wrong_shape_is_invalid_params_with_raw_data() {
    let mut item = single(r#"{"jsonrpc":"2.0","method":"Arith.Add","params":{"a":"x"},"id":1}"#);
    let err = item.read_args::<AddArgs>().unwrap_err();
    assert_eq!(err.kind(), Some(ErrorCode::InvalidParams));

    let obj = err.into_error_object();
    assert_eq!(obj.data.unwrap().get(), r#"{"a":"x"}"#);
}

#[test]
fn replies_echo_the_id_verbatim() {
    let item = single(r#"{"jsonrpc":"2.0","method":"Echo.Say","params":{},"id":{"k":[1, 2]}}"#);
    let ok = item.success_reply(RawValue::from_string("true".into()).unwrap());
    assert_eq!(ok.response().id.as_ref().unwrap().get(), r#"{"k":[1, 2]}"#);
    assert!(!ok.response().is_error());

    let failed = item.error_reply(RpcError::Server("boom".into()));
    let err = failed.response().error.as_ref().unwrap();
    assert_eq!(err.code, ErrorCode::ServerError.code());
    assert_eq!(err.message, "boom");
    assert!(failed.response().result.is_none());
}

#[test]
fn structured_handler_error_keeps_its_code() {
    let item = single(r#"{"jsonrpc":"2.0","method":"Echo.Say","params":{},"id":1}"#);
    let reply = item.error_reply(RpcError::with_code(-32001, "overflow"));
    let err = reply.response().error.as_ref().unwrap();
    assert_eq!(err.code, -32001);
    assert_eq!(err.message, "overflow");
}
