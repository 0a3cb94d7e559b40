#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tally_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  shutdown_grace: 500 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.shutdown_grace_ms, 10000);
    assert!(cfg.ops.enabled);
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9090"
  shutdown_grace_ms: 2500
ops:
  enabled: false
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9090);
    assert_eq!(cfg.server.shutdown_grace().as_millis(), 2500);
    assert!(!cfg.ops.enabled);
}

#[test]
fn rejects_wrong_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_bad_listen_and_grace() {
    let bad_listen = "version: 1\nserver:\n  listen: \"not-an-addr\"\n";
    let err = config::load_from_str(bad_listen).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");

    let bad_grace = "version: 1\nserver:\n  shutdown_grace_ms: 5\n";
    let err = config::load_from_str(bad_grace).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("/nonexistent/tally.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
