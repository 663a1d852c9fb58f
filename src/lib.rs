//! claude-sync - keep a local Claude Code configuration tree in sync with a
//! GitHub gist.
//!
//! This library provides the core functionality for the `claude-sync` CLI
//! tool: scanning the config tree, diffing it against the remote gist,
//! resolving conflicts, and rotating backups before destructive writes.

pub mod auth;
pub mod backup;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod diff;
pub mod gist;
pub mod history;
pub mod paths;
pub mod redact;
pub mod resolve;
pub mod scan;
pub mod ui;

/// Library-level error type for claude-sync operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "Not linked to a gist: run `claude-sync init` first, or `claude-sync link <gist-id>` to link an existing gist"
    )]
    NotInitialized,

    #[error("Could not determine home directory")]
    NoHomeDir,

    #[error("No GitHub token available: set GITHUB_TOKEN or authenticate with `gh auth login`")]
    NoToken,

    #[error("Invalid or expired GitHub token: the API returned 401 Unauthorized")]
    Unauthorized,

    #[error("Token lacks required permissions: the API returned 403 Forbidden")]
    Forbidden,

    #[error("Gist not found: {0}. It may be private or deleted")]
    GistNotFound(String),

    #[error("Invalid gist ID or URL: {0}. Expected a hex gist ID or a gist.github.com URL")]
    InvalidGistId(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for claude-sync operations.
pub type Result<T> = std::result::Result<T, Error>;
