//! Smoke tests for scopekit-cli
//!
//! These run the built `scopekit` binary and check its output without any
//! configuration beyond what each test passes in.

use std::process::{Command, Output};

fn scopekit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scopekit"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("SCOPEKIT_SCOPES")
        .output()
        .expect("Failed to execute scopekit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Test that the CLI can show help
#[test]
fn test_cli_help() {
    let output = scopekit(&["--help"]);
    assert!(output.status.success());
    let help = stdout(&output);
    assert!(help.contains("parse"), "Help should mention 'parse' command");
    assert!(help.contains("compare"), "Help should mention 'compare' command");
}

#[test]
fn test_encode_escapes_commas() {
    let output = scopekit(&["encode", "a,b", "C"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "a\\,b,c");
}

#[test]
fn test_canonicalize() {
    let output = scopekit(&["canonicalize", "  Stage   LEFT "]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "stage left");
}

#[test]
fn test_parse_lists_members() {
    let output = scopekit(&["parse", "b,A\\,x"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("a,x"));
    assert!(text.contains("    b"));
}

#[test]
fn test_parse_rejects_malformed_escape() {
    let output = scopekit(&["parse", "bad\\"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed escape"));
}

#[test]
fn test_compare_reports_intersection() {
    let output = scopekit(&["compare", "a,b,c", "b,c,d"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("b,c"));
    assert!(text.contains("true"));
}

#[test]
fn test_match_uses_scopes_flag() {
    let accepted = scopekit(&["--scopes", "stage,foh", "match", "FOH"]);
    assert!(accepted.status.success());

    let rejected = scopekit(&["--scopes", "stage", "match", "backstage"]);
    assert!(!rejected.status.success());
}

#[test]
fn test_match_defaults_to_default_scope() {
    let output = scopekit(&["match", "DEFAULT"]);
    assert!(output.status.success());
}
