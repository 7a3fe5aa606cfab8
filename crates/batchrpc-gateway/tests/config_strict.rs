#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use batchrpc_core::protocol::EncoderSelector;
use batchrpc_gateway::config;
use batchrpc_gateway::dispatch::DispatchErrorMode;
use batchrpc_gateway::error::GatewayError;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
gateway:
  listen: "0.0.0.0:8080"
rpc:
  content_typez: ["application/json"] # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, GatewayError::ConfigYaml(_)), "got {err}");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.rpc_path, "/rpc");
    assert_eq!(cfg.gateway.max_body_bytes, 1024 * 1024);
    assert_eq!(cfg.rpc.content_types, vec!["application/json".to_string()]);
    assert_eq!(cfg.rpc.compression, EncoderSelector::Identity);
    assert_eq!(cfg.rpc.on_dispatch_error, DispatchErrorMode::Isolate);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9000"
  rpc_path: "/api/rpc"
  max_body_bytes: 4096
rpc:
  content_types: ["application/json", "application/json-rpc"]
  compression: negotiate
  on_dispatch_error: halt
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.gateway.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.rpc.content_types.len(), 2);
    assert_eq!(cfg.rpc.compression, EncoderSelector::Negotiate);
    assert_eq!(cfg.rpc.on_dispatch_error, DispatchErrorMode::Halt);
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(matches!(err, GatewayError::UnsupportedVersion(2)));
}

#[test]
fn invalid_values_are_rejected() {
    let cases = [
        "version: 1\ngateway:\n  listen: \"nope\"\n",
        "version: 1\ngateway:\n  rpc_path: \"rpc\"\n",
        "version: 1\ngateway:\n  max_body_bytes: 1\n",
        "version: 1\nrpc:\n  content_types: []\n",
        "version: 1\nrpc:\n  content_types: [\"application/json; charset=utf-8\"]\n",
    ];
    for case in cases {
        let err = config::load_from_str(case).expect_err(case);
        assert!(matches!(err, GatewayError::InvalidConfig(_)), "case={case} got {err}");
    }
}

#[test]
fn duplicate_content_types_are_rejected() {
    let dup = "version: 1\nrpc:\n  content_types: [\"application/json\", \"Application/JSON\"]\n";
    let err = config::load_from_str(dup).expect_err("must fail");
    assert!(matches!(err, GatewayError::DuplicateCodec(_)));
}

#[test]
fn unknown_enum_value_is_rejected() {
    let bad = "version: 1\nrpc:\n  on_dispatch_error: retry\n";
    assert!(matches!(
        config::load_from_str(bad),
        Err(GatewayError::ConfigYaml(_))
    ));
}
