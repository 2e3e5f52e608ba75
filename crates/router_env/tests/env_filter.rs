#![allow(clippy::unwrap_used)]

use router_env::{config::Log, LoggerError};

// Runs in its own test binary since it mutates the process environment.
#[test]
fn rust_log_takes_precedence_over_configured_directive() {
    std::env::set_var("RUST_LOG", "bridge=notalevel");
    let valid: Log = serde_json::from_value(serde_json::json!({
        "console": { "filtering_directive": "info" }
    }))
    .unwrap();

    let error = router_env::setup(&valid, "router_env", Vec::<String>::new()).unwrap_err();
    assert!(matches!(error.current_context(), LoggerError::InvalidDirective));

    std::env::set_var("RUST_LOG", "debug");
    let invalid: Log = serde_json::from_value(serde_json::json!({
        "console": { "enabled": false, "filtering_directive": "bridge=notalevel" }
    }))
    .unwrap();

    assert!(router_env::setup(&invalid, "router_env", Vec::<String>::new()).is_ok());
}
