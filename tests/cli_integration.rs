//! Integration tests for aslookup CLI functionality
//!
//! None of these tests perform a real lookup: they drive the argument and
//! stdin handling paths with invalid input, so no network access happens.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    let mut cmd = Command::cargo_bin("aslookup").expect("Failed to find aslookup binary");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "autonomous system information for IPv4 addresses",
        ))
        .stdout(predicate::str::contains("--service"))
        .stdout(predicate::str::contains("--header"))
        .stdout(predicate::str::contains("--raw"))
        .stdout(predicate::str::contains("--pause"))
        .stdout(predicate::str::contains("standard input"));
}

#[test]
fn test_version_output() {
    let mut cmd = Command::cargo_bin("aslookup").expect("Failed to find aslookup binary");
    cmd.arg("--version");

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("aslookup "));
    // In debug builds, should contain -UNRELEASED
    if cfg!(debug_assertions) {
        assert!(stdout.contains("-UNRELEASED"));
    }
}

#[test]
fn test_invalid_argument_address_aborts() {
    let mut cmd = Command::cargo_bin("aslookup").expect("Failed to find aslookup binary");
    cmd.arg("not-an-ip");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not-an-ip"))
        .stderr(predicate::str::contains("not a valid IPv4 address"));
}

#[test]
fn test_invalid_stdin_address_continues() {
    let mut cmd = Command::cargo_bin("aslookup").expect("Failed to find aslookup binary");
    cmd.write_stdin("not-an-ip\nalso-bad\n");

    // Stdin mode reports each bad address on stderr without aborting
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not-an-ip"))
        .stderr(predicate::str::contains("also-bad"));
}

#[test]
fn test_header_output() {
    let mut cmd = Command::cargo_bin("aslookup").expect("Failed to find aslookup binary");
    cmd.arg("--header").write_stdin("");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("IP Address"))
        .stdout(predicate::str::contains("AS Information"))
        .stdout(predicate::str::contains("-".repeat(50)));
}

#[test]
fn test_unknown_service_rejected_by_parser() {
    let mut cmd = Command::cargo_bin("aslookup").expect("Failed to find aslookup binary");
    cmd.args(["--service", "no-such-service", "8.8.8.8"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no-such-service"));
}

#[test]
fn test_raw_conflicts_with_json() {
    let mut cmd = Command::cargo_bin("aslookup").expect("Failed to find aslookup binary");
    cmd.args(["--raw", "--json", "8.8.8.8"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_whitespace_only_stdin_lines_reported() {
    let mut cmd = Command::cargo_bin("aslookup").expect("Failed to find aslookup binary");
    // A blank line trims to the empty string, which is not a valid address
    cmd.write_stdin("\n");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("not a valid IPv4 address"));
}
