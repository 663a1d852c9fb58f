//! Per-invocation history logging.
//!
//! Every command appends one JSONL entry (timestamp, command, outcome,
//! duration) to `{data_dir}/history.log`. Logging never fails the command
//! it records; problems degrade to a stderr warning. Set
//! `CLAUDE_SYNC_HISTORY=0` to disable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::paths;

/// One recorded command invocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// ISO 8601 timestamp when the command finished.
    pub timestamp: DateTime<Utc>,

    /// Command name, e.g. "push" or "import".
    pub command: String,

    /// Whether the command succeeded.
    pub success: bool,

    /// Error message if the command failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Command execution duration in milliseconds.
    pub duration_ms: u64,
}

/// Append an entry to the history log. Never fails.
pub fn log_command(command: &str, success: bool, error: Option<String>, duration_ms: u64) {
    if std::env::var("CLAUDE_SYNC_HISTORY").as_deref() == Ok("0") {
        return;
    }

    let entry = HistoryEntry {
        timestamp: Utc::now(),
        command: command.to_string(),
        success,
        error,
        duration_ms,
    };

    let path = match paths::history_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Warning: failed to resolve history log path: {}", e);
            return;
        }
    };

    if let Err(e) = append_entry(&path, &entry) {
        eprintln!("Warning: failed to write history log: {}", e);
    }
}

fn append_entry(path: &Path, entry: &HistoryEntry) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(entry)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entry_serializes_without_null_error() {
        let entry = HistoryEntry {
            timestamp: Utc::now(),
            command: "status".to_string(),
            success: true,
            error: None,
            duration_ms: 12,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""command":"status""#));
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_append_creates_parents_and_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/history.log");

        for i in 0..2 {
            let entry = HistoryEntry {
                timestamp: Utc::now(),
                command: format!("cmd{}", i),
                success: i == 0,
                error: (i != 0).then(|| "boom".to_string()),
                duration_ms: i,
            };
            append_entry(&path, &entry).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: HistoryEntry = serde_json::from_str(lines[0]).unwrap();
        assert!(first.success);
        let second: HistoryEntry = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.error.as_deref(), Some("boom"));
    }
}
