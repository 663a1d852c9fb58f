//! Secret redaction for settings content before it reaches a gist.
//!
//! Gists are not encrypted, and `share` even creates public ones, so
//! secret-shaped values in `settings.json` are masked before upload. Only
//! the value side of a match is replaced; keys and everything around them
//! stay byte-for-byte intact. Local files are never modified.

use regex::Regex;
use std::sync::LazyLock;

/// The only filename redaction applies to.
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Placeholder written in place of a masked value.
pub const PLACEHOLDER: &str = "<REDACTED>";

/// How a matched pattern gets masked.
enum Mask {
    /// Keep capture group 1 (the key side), mask the rest as a quoted value.
    DoubleQuotedValue,
    /// Same, for single-quoted values.
    SingleQuotedValue,
    /// `KEY=value` assignment: keep group 1, mask everything after `=`.
    Assignment,
    /// Replace the entire match (bare tokens).
    Whole,
}

struct SecretPattern {
    regex: Regex,
    mask: Mask,
}

/// Secret-shaped patterns, evaluated in order. Key names are matched
/// case-insensitively; token prefixes are not.
static SENSITIVE_PATTERNS: LazyLock<Vec<SecretPattern>> = LazyLock::new(|| {
    let mut patterns = Vec::new();

    let key_names = [
        "ANTHROPIC_AUTH_TOKEN",
        "API_KEY",
        "APIKEY",
        "AUTH_TOKEN",
        "GITHUB_TOKEN",
        "SECRET",
        "PASSWORD",
        "TOKEN",
    ];
    for key in key_names {
        patterns.push(SecretPattern {
            regex: Regex::new(&format!(r#"(?i)("{key}"\s*:\s*)"[^"]*""#)).unwrap(),
            mask: Mask::DoubleQuotedValue,
        });
        patterns.push(SecretPattern {
            regex: Regex::new(&format!(r#"(?i)('{key}'\s*:\s*)'[^']*'"#)).unwrap(),
            mask: Mask::SingleQuotedValue,
        });
    }

    // Shell-style assignments for the env-var shaped keys
    for key in ["ANTHROPIC_AUTH_TOKEN", "API_KEY", "GITHUB_TOKEN"] {
        patterns.push(SecretPattern {
            regex: Regex::new(&format!(r"(?i)({key})=[^\n]*")).unwrap(),
            mask: Mask::Assignment,
        });
    }

    // Bare tokens with known provider prefixes
    for prefix in ["sk", "anthropic", "minimax", "openai"] {
        patterns.push(SecretPattern {
            regex: Regex::new(&format!(r"{prefix}-[a-zA-Z0-9_-]{{20,}}")).unwrap(),
            mask: Mask::Whole,
        });
    }

    // Catch-all: very long alphanumeric runs are likely keys in formats we
    // don't recognize (Azure and friends)
    patterns.push(SecretPattern {
        regex: Regex::new(r"[a-zA-Z0-9_-]{86,}").unwrap(),
        mask: Mask::Whole,
    });

    patterns
});

/// Redact secret-shaped substrings from `content`.
///
/// Returns the (possibly rewritten) content and whether anything matched.
/// Files other than `settings.json` pass through untouched.
pub fn redact(content: &str, filename: &str) -> (String, bool) {
    if filename != SETTINGS_FILENAME {
        return (content.to_string(), false);
    }

    let mut redacted = content.to_string();
    let mut had_sensitive_data = false;

    for pattern in SENSITIVE_PATTERNS.iter() {
        if !pattern.regex.is_match(&redacted) {
            continue;
        }
        had_sensitive_data = true;

        redacted = match pattern.mask {
            Mask::DoubleQuotedValue => pattern
                .regex
                .replace_all(&redacted, format!("${{1}}\"{PLACEHOLDER}\""))
                .into_owned(),
            Mask::SingleQuotedValue => pattern
                .regex
                .replace_all(&redacted, format!("${{1}}'{PLACEHOLDER}'"))
                .into_owned(),
            Mask::Assignment => pattern
                .regex
                .replace_all(&redacted, format!("${{1}}={PLACEHOLDER}"))
                .into_owned(),
            Mask::Whole => pattern
                .regex
                .replace_all(&redacted, PLACEHOLDER)
                .into_owned(),
        };
    }

    (redacted, had_sensitive_data)
}

/// Warning shown when redaction fired before a public upload.
pub const SENSITIVE_WARNING: &str = "Sensitive data detected in settings.json!
The following values will be REDACTED before upload to protect your secrets:
- ANTHROPIC_AUTH_TOKEN
- API_KEY, AUTH_TOKEN, GITHUB_TOKEN
- Any tokens starting with sk-, anthropic-, minimax-, openai-
- Long alphanumeric strings (likely API keys)

Your original local files remain unchanged.";
