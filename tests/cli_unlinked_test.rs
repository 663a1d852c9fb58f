//! Behavior of sync commands before any gist has been linked.
//!
//! All of these paths fail fast on the missing link config and never reach
//! authentication or the network, so they are safe to run offline.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_push_without_link_fails() {
    let env = TestEnv::new();
    env.cmd()
        .arg("push")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not linked to a gist"))
        .stderr(predicate::str::contains("claude-sync init"));
}

#[test]
fn test_pull_without_link_fails() {
    let env = TestEnv::new();
    env.cmd()
        .arg("pull")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not linked to a gist"));
}

#[test]
fn test_status_without_link_fails() {
    let env = TestEnv::new();
    env.cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not linked to a gist"));
}

#[test]
fn test_corrupt_config_behaves_like_unlinked() {
    let env = TestEnv::new();
    fs::write(env.config_path(), "definitely not json").unwrap();

    env.cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not linked to a gist"));
}

#[test]
fn test_failed_command_is_recorded_in_history() {
    let env = TestEnv::new();
    env.cmd().arg("push").assert().failure();

    let history = fs::read_to_string(env.history_path()).unwrap();
    let entry: serde_json::Value = serde_json::from_str(history.lines().next().unwrap()).unwrap();
    assert_eq!(entry["command"], "push");
    assert_eq!(entry["success"], false);
    assert!(
        entry["error"]
            .as_str()
            .unwrap()
            .contains("Not linked to a gist")
    );
}

#[test]
fn test_history_can_be_disabled() {
    let env = TestEnv::new();
    env.cmd()
        .arg("push")
        .env("CLAUDE_SYNC_HISTORY", "0")
        .assert()
        .failure();

    assert!(!env.history_path().exists());
}
