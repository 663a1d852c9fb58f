//! Pre-write snapshots of local config files.
//!
//! Before any sync operation overwrites or deletes a local file, the
//! current content is copied into the backups directory under a name that
//! encodes the original relative path plus a sortable timestamp. Only the
//! newest [`MAX_BACKUPS_PER_FILE`] snapshots per logical file are retained.
//! Backups are a safety net: rotation problems are reported on stderr and
//! never abort the sync that triggered them.

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// Retention cap per logical file.
pub const MAX_BACKUPS_PER_FILE: usize = 5;

/// Flatten a relative path into a backup file identifier.
fn file_identifier(relative_path: &str) -> String {
    relative_path.replace('/', "__")
}

/// Extract the identifier part of a snapshot name. The timestamp prefix
/// contains no underscore, so the first one separates the two parts. A bare
/// suffix test would be wrong here: `{ts}_rules__a.md` ends with `_a.md`
/// and would be miscounted as a snapshot of `a.md`.
fn snapshot_identifier(name: &str) -> Option<&str> {
    name.split_once('_').map(|(_, identifier)| identifier)
}

/// Snapshot `source` (the file at `relative_path` inside the config tree)
/// into `backups_dir`.
///
/// Returns the snapshot location, or `None` when the file does not exist -
/// nothing to protect. Retention is enforced after the copy.
pub fn backup_file(
    backups_dir: &Path,
    source: &Path,
    relative_path: &str,
) -> Result<Option<PathBuf>> {
    if !source.exists() {
        return Ok(None);
    }

    fs::create_dir_all(backups_dir)?;

    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S-%6fZ");
    let dest = backups_dir.join(format!("{}_{}", timestamp, file_identifier(relative_path)));
    fs::copy(source, &dest)?;

    rotate_backups(backups_dir, relative_path);

    Ok(Some(dest))
}

/// Delete snapshots of `relative_path` beyond the retention cap, oldest
/// first. Errors are swallowed: a failed rotation must not fail the sync.
fn rotate_backups(backups_dir: &Path, relative_path: &str) {
    let identifier = file_identifier(relative_path);

    let entries = match fs::read_dir(backups_dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Warning: failed to list backups: {}", e);
            return;
        }
    };

    let mut related: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| snapshot_identifier(name) == Some(identifier.as_str()))
        .collect();

    // Timestamp prefix makes lexicographic order chronological
    related.sort();
    related.reverse();

    for name in related.iter().skip(MAX_BACKUPS_PER_FILE) {
        if let Err(e) = fs::remove_file(backups_dir.join(name)) {
            eprintln!("Warning: failed to prune backup {}: {}", name, e);
        }
    }
}
