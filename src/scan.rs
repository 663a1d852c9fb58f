//! Scanning the Claude config tree into a path -> content map.
//!
//! The scanner walks the tree, keeps only files matched by the sync
//! patterns (exclusions always win), reads each survivor as UTF-8 text and
//! runs it through redaction before it enters the map. Unreadable files are
//! skipped so one broken entry never sinks a whole sync.

use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::Result;
use crate::redact;

/// Snapshot of a file set: canonical relative path -> full text content.
pub type FileMap = BTreeMap<String, String>;

/// Paths that participate in sync. A file is kept if at least one of these
/// matches and no exclude pattern does.
pub const SYNC_PATTERNS: &[&str] = &[
    "settings.json",
    "keybindings.json",
    "CLAUDE.md",
    "agents/**/AGENT.md",
    "agents/**/*.md",
    "skills/**/SKILL.md",
    "skills/**/*.md",
    "skills/**/*.txt",
    "rules/*.md",
];

/// Paths dropped from sync regardless of the include patterns.
pub const EXCLUDE_PATTERNS: &[&str] = &[
    "*.local.json",
    "*.local.md",
    "*.bak",
    "agent-memory/**",
    "agent-memory-local/**",
    "ide/**",
    "statsig/**",
    "todo/**",
    "tmp/**",
];

/// Compile a sync glob into an anchored regex.
///
/// Grammar: `*` matches within one path segment, `**/` matches zero or more
/// whole segments, everything else is literal. `foo/**` (no trailing slash
/// component) matches everything under `foo/`.
fn glob_to_regex(pattern: &str) -> Regex {
    let mut regex = String::from("^");
    let mut rest = pattern;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("**/") {
            regex.push_str("(.+/)?");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("**") {
            regex.push_str(".*");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('*') {
            regex.push_str("[^/]+");
            rest = tail;
        } else {
            let next = rest.find('*').unwrap_or(rest.len());
            regex.push_str(&regex::escape(&rest[..next]));
            rest = &rest[next..];
        }
    }

    regex.push('$');
    // Patterns are compile-time constants; a bad one is a bug, not input.
    Regex::new(&regex).expect("invalid sync pattern")
}

/// Does a normalized relative path match a sync glob?
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    glob_to_regex(pattern).is_match(path)
}

/// Should this relative path participate in sync? Exclusions are checked
/// first and are absolute.
pub fn should_include(relative_path: &str) -> bool {
    let normalized = relative_path.replace('\\', "/");

    if EXCLUDE_PATTERNS
        .iter()
        .any(|p| matches_pattern(&normalized, p))
    {
        return false;
    }

    SYNC_PATTERNS
        .iter()
        .any(|p| matches_pattern(&normalized, p))
}

/// Result of scanning the config tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Syncable files, contents already redacted.
    pub files: FileMap,
    /// True if redaction fired on at least one file.
    pub has_sensitive_data: bool,
}

/// Scan `root` into a [`ScanResult`].
///
/// A missing root yields an empty result rather than an error, so `init`
/// on a fresh machine degrades to "nothing to sync".
pub fn scan_dir(root: &Path) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    if !root.exists() {
        return Ok(result);
    }

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let normalized = relative.to_string_lossy().replace('\\', "/");

        if !should_include(&normalized) {
            continue;
        }

        // Unreadable or non-UTF-8 files are silently skipped
        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };

        let (redacted, had_sensitive_data) = redact::redact(&content, &normalized);
        if had_sensitive_data {
            result.has_sensitive_data = true;
        }
        result.files.insert(normalized, redacted);
    }

    Ok(result)
}

/// Fixed semantic buckets for known config paths.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Categories {
    pub settings: Vec<String>,
    pub memory: Vec<String>,
    pub agents: Vec<String>,
    pub skills: Vec<String>,
    pub rules: Vec<String>,
}

/// Bucket known paths by shape. Paths matching no rule are left out of
/// every bucket but still sync.
pub fn categorize(files: &FileMap) -> Categories {
    let mut categories = Categories::default();

    for path in files.keys() {
        if path == "settings.json" || path == "keybindings.json" {
            categories.settings.push(path.clone());
        } else if path == "CLAUDE.md" {
            categories.memory.push(path.clone());
        } else if path.starts_with("agents/") {
            categories.agents.push(path.clone());
        } else if path.starts_with("skills/") {
            categories.skills.push(path.clone());
        } else if path.starts_with("rules/") {
            categories.rules.push(path.clone());
        }
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_star_does_not_cross_segments() {
        assert!(matches_pattern("rules/style.md", "rules/*.md"));
        assert!(!matches_pattern("rules/nested/style.md", "rules/*.md"));
    }

    #[test]
    fn test_double_star_matches_zero_or_more_segments() {
        assert!(matches_pattern("agents/AGENT.md", "agents/**/AGENT.md"));
        assert!(matches_pattern(
            "agents/reviewer/AGENT.md",
            "agents/**/AGENT.md"
        ));
        assert!(matches_pattern(
            "agents/a/b/c/AGENT.md",
            "agents/**/AGENT.md"
        ));
        assert!(!matches_pattern("skills/reviewer/AGENT.md", "agents/**/AGENT.md"));
    }

    #[test]
    fn test_matching_is_anchored() {
        assert!(!matches_pattern("sub/settings.json", "settings.json"));
        assert!(!matches_pattern("settings.json.bak2", "settings.json"));
    }

    #[test]
    fn test_dot_is_literal() {
        assert!(!matches_pattern("settingsxjson", "settings.json"));
    }

    #[test]
    fn test_trailing_double_star_matches_subtree() {
        assert!(matches_pattern("ide/lock", "ide/**"));
        assert!(matches_pattern("ide/a/b", "ide/**"));
        assert!(!matches_pattern("identity/a", "ide/**"));
    }

    #[test]
    fn test_exclude_beats_include() {
        // *.local.json is excluded even though settings patterns exist
        assert!(should_include("settings.json"));
        assert!(!should_include("settings.local.json"));
        assert!(!should_include("agents/memo.bak"));
    }

    #[test]
    fn test_unknown_paths_not_included() {
        assert!(!should_include("random.txt"));
        assert!(!should_include("statsig/cache.json"));
    }

    #[test]
    fn test_scan_missing_root_is_empty() {
        let result = scan_dir(Path::new("/nonexistent/claude-sync-test")).unwrap();
        assert!(result.files.is_empty());
        assert!(!result.has_sensitive_data);
    }

    #[test]
    fn test_scan_filters_and_redacts() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("settings.json"),
            r#"{"API_KEY":"secret123","MODEL":"x"}"#,
        )
        .unwrap();
        fs::write(dir.path().join("CLAUDE.md"), "# memory").unwrap();
        fs::write(dir.path().join("notes.txt"), "not synced").unwrap();
        fs::write(dir.path().join("settings.local.json"), "{}").unwrap();
        fs::create_dir_all(dir.path().join("agents/helper")).unwrap();
        fs::write(dir.path().join("agents/helper/AGENT.md"), "# helper").unwrap();

        let result = scan_dir(dir.path()).unwrap();
        assert!(result.has_sensitive_data);

        let paths: Vec<&str> = result.files.keys().map(|s| s.as_str()).collect();
        assert_eq!(paths, vec!["CLAUDE.md", "agents/helper/AGENT.md", "settings.json"]);
        assert!(result.files["settings.json"].contains("<REDACTED>"));
        assert!(result.files["settings.json"].contains(r#""MODEL":"x""#));
    }

    #[test]
    fn test_scan_without_secrets_clears_flag() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CLAUDE.md"), "# memory").unwrap();

        let result = scan_dir(dir.path()).unwrap();
        assert!(!result.has_sensitive_data);
        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_categorize_buckets() {
        let mut files = FileMap::new();
        for path in [
            "settings.json",
            "keybindings.json",
            "CLAUDE.md",
            "agents/helper/AGENT.md",
            "skills/sql/SKILL.md",
            "rules/style.md",
            "misc/other.md",
        ] {
            files.insert(path.to_string(), String::new());
        }

        let categories = categorize(&files);
        assert_eq!(categories.settings, vec!["keybindings.json", "settings.json"]);
        assert_eq!(categories.memory, vec!["CLAUDE.md"]);
        assert_eq!(categories.agents, vec!["agents/helper/AGENT.md"]);
        assert_eq!(categories.skills, vec!["skills/sql/SKILL.md"]);
        assert_eq!(categories.rules, vec!["rules/style.md"]);
        // misc/other.md is in no bucket but stays in the map
        assert!(files.contains_key("misc/other.md"));
    }
}
