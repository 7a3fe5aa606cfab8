//! Request body decode vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;

use batchrpc_core::protocol::codec::decode_body;
use batchrpc_core::protocol::Encoder;

use vector_loader::load;

#[test]
fn decode_vectors() {
    let files = [
        "single_ok.json",
        "batch_two.json",
        "empty.json",
        "whitespace.json",
        "bad_version.json",
        "batch_mixed_version.json",
        "parse_error_single.json",
        "parse_error_batch.json",
        "parse_error_binary.json",
        "batch_non_object.json",
        "missing_method.json",
        "notification_null_id.json",
        "leading_whitespace_batch.json",
    ];

    for f in files {
        let v = load(f);
        let res = decode_body(Bytes::from(v.body.decode()), Encoder::Identity);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected parse error");
            assert_eq!(e.code, err.code, "vector={}", v.description);
            continue;
        }

        let items = res.expect("expected items");
        let ex = v.expect.expect("missing expect block");
        let expected = ex["items"].as_array().unwrap();
        assert_eq!(items.len(), expected.len(), "vector={}", v.description);

        for (i, (item, want)) in items.iter().zip(expected).enumerate() {
            assert_eq!(item.index(), i, "vector={}", v.description);

            match want["method"].as_str() {
                Some(m) => assert_eq!(item.method().unwrap(), m, "vector={}", v.description),
                None => assert!(item.method().is_err(), "vector={}", v.description),
            }

            match want["id"].as_str() {
                Some(id) => assert_eq!(item.id().unwrap().get(), id, "vector={}", v.description),
                None => assert!(item.id().is_none(), "vector={}", v.description),
            }

            match want["error"].as_i64() {
                Some(code) => {
                    assert_eq!(item.decode_error().unwrap().code, code, "vector={}", v.description)
                }
                None => assert!(item.decode_error().is_none(), "vector={}", v.description),
            }

            assert_eq!(
                item.is_notification(),
                want["notification"].as_bool().unwrap(),
                "vector={}",
                v.description
            );
        }
    }
}

#[test]
fn items_share_the_whole_body() {
    let body = Bytes::from_static(
        br#"[{"jsonrpc":"2.0","method":"Echo.Say","params":{"msg":"a"},"id":1},{"jsonrpc":"2.0","method":"Echo.Say","params":{"msg":"b"},"id":2}]"#,
    );
    let items = decode_body(body.clone(), Encoder::Gzip).unwrap();

    assert_eq!(items.len(), 2);
    for item in &items {
        assert_eq!(item.raw_body(), &body);
        assert_eq!(item.raw_body().as_ptr(), body.as_ptr());
        assert_eq!(item.encoder(), Encoder::Gzip);
    }
    assert_eq!(
        items[1].raw(),
        &Bytes::from_static(br#"{"jsonrpc":"2.0","method":"Echo.Say","params":{"msg":"b"},"id":2}"#)
    );
}

#[test]
fn version_error_carries_the_element_as_data() {
    let body = Bytes::from_static(br#"{"jsonrpc":"1.0","method":"Echo.Say","params":{},"id":1}"#);
    let items = decode_body(body, Encoder::Identity).unwrap();
    let err = items[0].decode_error().unwrap();
    assert_eq!(err.message, "jsonrpc must be 2.0");
    assert_eq!(
        err.data.as_ref().unwrap().get(),
        r#"{"jsonrpc":"1.0","method":"Echo.Say","params":{},"id":1}"#
    );
}
