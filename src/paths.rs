//! Well-known directories used by claude-sync.
//!
//! Two roots matter:
//! - the Claude config tree (`~/.claude`) that gets synced, and
//! - the data directory (`~/.claude-sync`) holding the link config,
//!   rotated backups and the JSONL command history.
//!
//! Both can be overridden with environment variables so tests (and unusual
//! setups) can point them at isolated directories:
//! - `CLAUDE_SYNC_CLAUDE_DIR` - the config tree to scan
//! - `CLAUDE_SYNC_DATA_DIR` - where config.json, backups/ and history.log live

use std::env;
use std::path::PathBuf;

use crate::{Error, Result};

/// Env var overriding the Claude config tree location.
pub const CLAUDE_DIR_ENV: &str = "CLAUDE_SYNC_CLAUDE_DIR";

/// Env var overriding the claude-sync data directory.
pub const DATA_DIR_ENV: &str = "CLAUDE_SYNC_DATA_DIR";

/// The Claude Code configuration tree that participates in sync.
pub fn claude_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(CLAUDE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(".claude"))
}

/// The directory holding claude-sync's own state.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(".claude-sync"))
}

/// Path of the persisted link config (gist id, token, timestamps).
pub fn config_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("config.json"))
}

/// Directory where pre-overwrite snapshots are kept.
pub fn backups_dir() -> Result<PathBuf> {
    Ok(data_dir()?.join("backups"))
}

/// Path of the JSONL command history log.
pub fn history_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("history.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_paths_share_a_root() {
        // Resolution goes through the same data_dir, whatever it is.
        let data = data_dir().unwrap();
        assert_eq!(config_path().unwrap(), data.join("config.json"));
        assert_eq!(backups_dir().unwrap(), data.join("backups"));
        assert_eq!(history_path().unwrap(), data.join("history.log"));
    }
}
