//! CLI integration tests for quorum resolve / quorum parse.
//!
//! These tests invoke the compiled binary to verify end-to-end behavior.

use std::process::Command;

fn quorum_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_quorum-cli"))
}

#[test]
fn cli_resolve_load_balancing_default_family() {
    let output = quorum_bin()
        .args(["resolve", "TokenAwarePolicy(RoundRobinPolicy())"])
        .output()
        .expect("run binary");

    assert!(
        output.status.success(),
        "resolve should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("TokenAwarePolicy") && stdout.contains("RoundRobinPolicy"),
        "stdout should show the wrapped policy: {}",
        stdout
    );
}

#[test]
fn cli_resolve_reconnection_family() {
    let output = quorum_bin()
        .args([
            "resolve",
            "ConstantReconnectionPolicy((long)10)",
            "--family",
            "reconnection",
        ])
        .output()
        .expect("run binary");

    assert!(
        output.status.success(),
        "resolve should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("ConstantReconnectionPolicy"),
        "stdout should show the policy: {}",
        stdout
    );
}

#[test]
fn cli_resolve_retry_family_bare_name() {
    let output = quorum_bin()
        .args(["resolve", "DefaultRetryPolicy", "--family", "retry"])
        .output()
        .expect("run binary");

    assert!(
        output.status.success(),
        "resolve should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("DefaultRetryPolicy"));
}

#[test]
fn cli_resolve_unknown_policy_fails() {
    let output = quorum_bin()
        .args(["resolve", "fakeLbPolicy()"])
        .output()
        .expect("run binary");

    assert!(!output.status.success(), "unknown policy should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown policy"),
        "stderr should name the failure: {}",
        stderr
    );
}

#[test]
fn cli_parse_json_dump() {
    let output = quorum_bin()
        .args([
            "parse",
            "DCAwareRoundRobinPolicy('dc1', 2)",
            "--format",
            "json",
        ])
        .output()
        .expect("run binary");

    assert!(
        output.status.success(),
        "parse should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let tree: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("valid JSON");
    assert_eq!(tree["name"]["text"], "DCAwareRoundRobinPolicy");
    assert_eq!(tree["args"].as_array().map(|a| a.len()), Some(2));
}

#[test]
fn cli_parse_malformed_expression_fails() {
    let output = quorum_bin()
        .args(["parse", "RoundRobinPolicy() trailing"])
        .output()
        .expect("run binary");

    assert!(!output.status.success(), "trailing garbage should fail");
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed expression"));
}
