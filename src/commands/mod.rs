//! Command implementations for the claude-sync CLI.
//!
//! Each submodule holds one subcommand's orchestration: load state, scan,
//! talk to the gist API, diff, and apply. The reconciliation primitives
//! live in the sibling modules (`scan`, `diff`, `codec`, `backup`,
//! `resolve`); commands wire them together.

pub mod import;
pub mod init;
pub mod link;
pub mod pull;
pub mod push;
pub mod share;
pub mod status;
pub mod unlink;

use chrono::Utc;

/// ISO 8601 timestamp for config bookkeeping fields.
pub(crate) fn now_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
