//! Mapping between hierarchical config paths and the flat gist namespace.
//!
//! Gists have no directories, so `agents/reviewer/AGENT.md` is stored as
//! `agents__reviewer__AGENT.md`. Encoding joins path segments with a
//! two-character sentinel; decoding splits on it.

use crate::gist::META_FILENAME;
use crate::scan::FileMap;
use std::collections::BTreeMap;

/// Sentinel standing in for `/` in gist filenames.
pub const PATH_SEPARATOR: &str = "__";

/// Encode a canonical relative path as a flat gist filename.
///
/// Known limitation: a path segment that itself contains `__` produces a
/// filename that decodes to a different path. Such names do not occur in
/// Claude config trees and are not detected.
pub fn encode(path: &str) -> String {
    path.replace('/', PATH_SEPARATOR)
}

/// Decode a flat gist filename back into a canonical relative path.
pub fn decode(gist_filename: &str) -> String {
    gist_filename
        .split(PATH_SEPARATOR)
        .collect::<Vec<_>>()
        .join("/")
}

/// Convert a scanned [`FileMap`] into the flat `name -> content` map the
/// gist API expects.
pub fn file_map_to_gist_files(files: &FileMap) -> BTreeMap<String, String> {
    files
        .iter()
        .map(|(path, content)| (encode(path), content.clone()))
        .collect()
}

/// True when `path` is a canonical relative path: non-empty segments, no
/// `.`/`..`, no leading slash. Gist filenames are remote input (public
/// gists are foreign content), so anything that would escape the config
/// tree is rejected here.
fn is_canonical_relative(path: &str) -> bool {
    !path.is_empty()
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
}

/// Convert gist files back into a [`FileMap`], dropping the reserved
/// metadata entry. The metadata entry is bookkeeping for claude-sync itself
/// and must never participate in a diff.
///
/// Names that decode to something other than a canonical relative path
/// (traversal segments, absolute paths) are dropped with a warning: local
/// writes are always `claude_dir.join(path)` and must stay inside the tree.
pub fn gist_files_to_file_map<'a, I>(gist_files: I) -> FileMap
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    gist_files
        .into_iter()
        .filter(|(name, _)| *name != META_FILENAME)
        .filter_map(|(name, content)| {
            let path = decode(name);
            if is_canonical_relative(&path) {
                Some((path, content.to_string()))
            } else {
                eprintln!("Warning: ignoring unsafe gist filename: {}", name);
                None
            }
        })
        .collect()
}
