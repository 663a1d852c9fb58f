//! Common test utilities for claude-sync integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't touch the
//! user's real `~/.claude/` or `~/.claude-sync/` directories.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
pub use tempfile::TempDir;

/// A test environment with isolated directories.
///
/// Each `TestEnv` creates two temporary directories:
/// - `claude_dir`: stands in for `~/.claude` (the synced config tree)
/// - `data_dir`: stands in for `~/.claude-sync` (link config, backups,
///   history)
///
/// The `cmd()` method returns a `Command` with the override env vars set
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub claude_dir: TempDir,
    pub data_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with isolated directories.
    pub fn new() -> Self {
        Self {
            claude_dir: TempDir::new().unwrap(),
            data_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the claude-sync binary with isolated directories.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_claude-sync"));
        cmd.env("CLAUDE_SYNC_CLAUDE_DIR", self.claude_dir.path());
        cmd.env("CLAUDE_SYNC_DATA_DIR", self.data_dir.path());
        // Keep token resolution away from the developer's gh login
        cmd.env_remove("GITHUB_TOKEN");
        cmd
    }

    /// Seed a syncable file inside the claude dir.
    pub fn write_claude_file(&self, relative_path: &str, content: &str) {
        let dest = self.claude_dir.path().join(relative_path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(dest, content).unwrap();
    }

    /// Seed a config.json linking to the given gist id.
    pub fn write_link_config(&self, gist_id: &str) {
        let config = format!(
            r#"{{
  "gistId": "{gist_id}",
  "gistUrl": "https://gist.github.com/someone/{gist_id}",
  "username": "someone"
}}
"#
        );
        fs::write(self.data_dir.path().join("config.json"), config).unwrap();
    }

    /// Path of the config file inside the data dir.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.data_dir.path().join("config.json")
    }

    /// Path of the history log inside the data dir.
    pub fn history_path(&self) -> std::path::PathBuf {
        self.data_dir.path().join("history.log")
    }

    pub fn claude_path(&self) -> &Path {
        self.claude_dir.path()
    }

    pub fn data_path(&self) -> &Path {
        self.data_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
