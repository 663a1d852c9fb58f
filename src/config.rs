//! Persisted link state: which gist this machine syncs with.
//!
//! Stored as JSON at `{data_dir}/config.json`. The file can hold a GitHub
//! token, so it is created with 0600 permissions on unix - owner read/write
//! only, same rule as any state file carrying secrets.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;

use crate::paths;
use crate::{Error, Result};

/// Permissions for config.json (may contain a token).
#[cfg(unix)]
pub const CONFIG_FILE_MODE: u32 = 0o600;

/// Link state persisted between invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// ID of the linked gist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gist_id: Option<String>,

    /// Browser URL of the linked gist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gist_url: Option<String>,

    /// GitHub login the gist belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Stored GitHub token (lowest-precedence source, see [`crate::auth`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// When the link was first created (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Timestamp of the last successful push.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_push: Option<String>,

    /// Timestamp of the last successful pull.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_pull: Option<String>,
}

/// Load the config, or `None` when it does not exist or fails to parse.
/// A corrupt config behaves like a fresh machine rather than a hard error.
pub fn load_config() -> Result<Option<SyncConfig>> {
    let path = paths::config_path()?;
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&content).ok())
}

/// Persist the config, creating the data directory as needed.
pub fn save_config(config: &SyncConfig) -> Result<()> {
    let path = paths::config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut content = serde_json::to_string_pretty(config)?;
    content.push('\n');
    fs::write(&path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(CONFIG_FILE_MODE))?;
    }

    Ok(())
}

/// Delete the config file. Missing file is fine.
pub fn remove_config() -> Result<()> {
    let path = paths::config_path()?;
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Load the config and require a linked gist.
pub fn require_config() -> Result<SyncConfig> {
    match load_config()? {
        Some(config) if config.gist_id.is_some() => Ok(config),
        _ => Err(Error::NotInitialized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_serialization() {
        let config = SyncConfig {
            gist_id: Some("abc123".to_string()),
            gist_url: Some("https://gist.github.com/user/abc123".to_string()),
            username: Some("user".to_string()),
            last_push: Some("2026-01-01T00:00:00Z".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SyncConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_field_names_are_camel_case() {
        let config = SyncConfig {
            gist_id: Some("abc123".to_string()),
            last_pull: Some("2026-01-01T00:00:00Z".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""gistId""#));
        assert!(json.contains(r#""lastPull""#));
        assert!(!json.contains("gist_id"));
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let json = serde_json::to_string(&SyncConfig::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_parses_partial_config() {
        let parsed: SyncConfig = serde_json::from_str(r#"{"gistId":"deadbeef"}"#).unwrap();
        assert_eq!(parsed.gist_id.as_deref(), Some("deadbeef"));
        assert!(parsed.token.is_none());
    }
}
