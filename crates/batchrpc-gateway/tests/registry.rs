#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use batchrpc_core::ErrorCode;
use batchrpc_gateway::dispatch::registry::FnMethod;
use batchrpc_gateway::dispatch::MethodRegistry;
use batchrpc_gateway::error::GatewayError;
use batchrpc_gateway::services::{self, EchoSay};

#[test]
fn builtin_services_are_registered() {
    let mut reg = MethodRegistry::new();
    services::register_builtin(&mut reg).unwrap();

    assert!(reg.has_method("Echo.Say"));
    assert!(reg.has_method("Arith.Add"));
    assert!(!reg.has_method("echo.say"));

    let names: Vec<String> = reg.describe().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["Arith.Add", "Arith.Divide", "Echo.Say"]);
}

#[test]
fn describe_reports_declared_shapes() {
    let mut reg = MethodRegistry::new();
    reg.register("Echo.Say", EchoSay).unwrap();
    let info = &reg.describe()[0];
    assert!(info.args.ends_with("EchoMsg"));
    assert!(info.reply.ends_with("EchoMsg"));
}

#[test]
fn names_must_be_dotted() {
    let mut reg = MethodRegistry::new();
    for bad in ["Echo", ".Say", "Echo.", "A.B.C", "Echo .Say", ""] {
        let err = reg.register(bad, EchoSay).expect_err(bad);
        assert!(matches!(err, GatewayError::InvalidMethodName(_)), "name={bad:?}");
    }
    assert!(reg.is_empty());
}

#[test]
fn duplicates_are_rejected() {
    let mut reg = MethodRegistry::new();
    reg.register("Echo.Say", EchoSay).unwrap();
    let err = reg.register("Echo.Say", EchoSay).unwrap_err();
    assert!(matches!(err, GatewayError::DuplicateMethod(_)));
    assert_eq!(reg.len(), 1);
}

#[test]
fn resolve_miss_is_method_not_found() {
    let mut reg = MethodRegistry::new();
    reg.register(
        "Math.Neg",
        FnMethod::new(|x: i64| async move { Ok::<i64, batchrpc_core::RpcError>(-x) }),
    )
    .unwrap();

    assert_eq!(reg.resolve("Math.Neg").unwrap().name(), "Math.Neg");
    let err = reg.resolve("Math.Abs").unwrap_err();
    assert_eq!(err.kind(), Some(ErrorCode::MethodNotFound));
}
