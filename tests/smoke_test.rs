//! Smoke tests for the claude-sync CLI.
//!
//! These verify basic CLI behavior: version/help output and that every
//! subcommand is wired up.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the claude-sync binary.
fn claude_sync() -> Command {
    Command::new(env!("CARGO_BIN_EXE_claude-sync"))
}

#[test]
fn test_version_flag() {
    claude_sync()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("claude-sync"))
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    claude_sync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("push"))
        .stdout(predicate::str::contains("pull"))
        .stdout(predicate::str::contains("import"));
}

#[test]
fn test_no_args_shows_usage_error() {
    claude_sync()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_unknown_command_rejected() {
    claude_sync()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_subcommand_help() {
    claude_sync()
        .args(["pull", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"))
        .stdout(predicate::str::contains("backups"));
}
