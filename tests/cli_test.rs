//! CLI argument handling, exercised against the real binary.
//!
//! Any invocation without exactly two positional arguments must print a
//! usage message on stdout and exit with status 1; a well-formed invocation
//! must get past argument parsing (here it then fails on configuration,
//! which uses a different exit code).

use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Output {
    // Empty values count as missing and, unlike removed variables, are not
    // overridden by a stray local .env file.
    Command::new(env!("CARGO_BIN_EXE_cognito-login"))
        .args(args)
        .env("CLIENT_ID", "")
        .env("CLIENT_SECRET", "")
        .env("POOL_ID", "")
        .output()
        .expect("failed to spawn binary")
}

fn assert_usage_on_stdout(args: &[&str]) {
    let output = run_binary(args);
    assert_eq!(
        output.status.code(),
        Some(1),
        "args {:?} should exit with status 1",
        args
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Usage:"),
        "args {:?} should print usage on stdout, got: {}",
        args,
        stdout
    );
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    assert_usage_on_stdout(&[]);
}

#[test]
fn one_argument_prints_usage_and_exits_1() {
    assert_usage_on_stdout(&["alice"]);
}

#[test]
fn three_arguments_print_usage_and_exit_1() {
    assert_usage_on_stdout(&["alice", "pw", "extra"]);
}

#[test]
fn two_arguments_proceed_past_parsing() {
    // With the required environment stripped the run fails on configuration
    // (exit code 2), proving parsing succeeded; no usage text is printed.
    let output = run_binary(&["alice", "pw"]);
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Usage:"), "unexpected usage text: {}", stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cannot load configuration"),
        "expected configuration error on stderr, got: {}",
        stderr
    );
}
