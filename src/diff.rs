//! Set-based diff between two path -> content maps.
//!
//! One pure function serves both sync directions. When pushing, `source` is
//! the local map and `target` the remote one, so `added` means local-only
//! and `removed` means remote-only. When pulling, callers swap the
//! arguments and the meanings mirror. The caller owns that interpretation;
//! the engine only partitions paths.

use crate::scan::FileMap;

/// A single file-level difference between two maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Canonical relative path.
    pub path: String,
    /// Content on the source side, when the path exists there.
    pub local_content: Option<String>,
    /// Content on the target side, when the path exists there.
    pub remote_content: Option<String>,
}

/// Partition of `keys(source) ∪ keys(target)` into four buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncDiff {
    /// Paths only in `source`.
    pub added: Vec<FileChange>,
    /// Paths in both with differing content.
    pub modified: Vec<FileChange>,
    /// Paths only in `target`.
    pub removed: Vec<FileChange>,
    /// Paths in both with identical content.
    pub unchanged: Vec<FileChange>,
}

/// Compute the four-way diff between two maps.
///
/// Comparison is exact: no whitespace or line-ending normalization. Every
/// path from either map lands in exactly one bucket.
pub fn compute_diff(source: &FileMap, target: &FileMap) -> SyncDiff {
    let mut diff = SyncDiff::default();

    for (path, content) in source {
        match target.get(path) {
            None => diff.added.push(FileChange {
                path: path.clone(),
                local_content: Some(content.clone()),
                remote_content: None,
            }),
            Some(target_content) if target_content == content => {
                diff.unchanged.push(FileChange {
                    path: path.clone(),
                    local_content: Some(content.clone()),
                    remote_content: Some(target_content.clone()),
                })
            }
            Some(target_content) => diff.modified.push(FileChange {
                path: path.clone(),
                local_content: Some(content.clone()),
                remote_content: Some(target_content.clone()),
            }),
        }
    }

    for (path, content) in target {
        if !source.contains_key(path) {
            diff.removed.push(FileChange {
                path: path.clone(),
                local_content: None,
                remote_content: Some(content.clone()),
            });
        }
    }

    diff
}

/// True iff anything actually differs. `unchanged` never counts.
pub fn has_differences(diff: &SyncDiff) -> bool {
    !diff.added.is_empty() || !diff.modified.is_empty() || !diff.removed.is_empty()
}

/// One-line human summary, e.g. `2 added, 1 modified`.
pub fn diff_summary(diff: &SyncDiff) -> String {
    let mut parts = Vec::new();
    if !diff.added.is_empty() {
        parts.push(format!("{} added", diff.added.len()));
    }
    if !diff.modified.is_empty() {
        parts.push(format!("{} modified", diff.modified.len()));
    }
    if !diff.removed.is_empty() {
        parts.push(format!("{} removed", diff.removed.len()));
    }
    if !diff.unchanged.is_empty() {
        parts.push(format!("{} unchanged", diff.unchanged.len()));
    }
    parts.join(", ")
}
