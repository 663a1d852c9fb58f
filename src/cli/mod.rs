//! CLI argument definitions for claude-sync.

use clap::{Parser, Subcommand};

/// Long version string including build metadata from build.rs.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("CS_GIT_COMMIT"),
    ", built ",
    env!("CS_BUILD_TIMESTAMP"),
    ")"
);

/// Sync your Claude Code configuration across machines using GitHub Gists.
#[derive(Parser, Debug)]
#[command(name = "claude-sync")]
#[command(author, version, long_version = LONG_VERSION)]
#[command(about = "Sync your Claude Code configuration across machines using GitHub Gists")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize sync - create a new secret gist storing your config
    Init {
        /// Skip confirmation prompts
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Push local config to the linked gist
    Push {
        /// Push without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Pull remote config to this machine
    Pull {
        /// Pull without prompting (still creates backups, never deletes
        /// local-only files)
        #[arg(short, long)]
        force: bool,
    },

    /// Show sync status - diff between local and remote
    Status,

    /// Create a public gist to share your config with others
    Share {
        /// Skip confirmation prompts and share every syncable file
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Import config from a shared gist (selective)
    Import {
        /// Gist ID or gist.github.com URL
        url_or_id: String,

        /// Import every file without the selection prompt
        #[arg(long)]
        all: bool,
    },

    /// Link to an existing gist on a new machine
    Link {
        /// Gist ID or gist.github.com URL
        url_or_id: String,
    },

    /// Remove the local link to the gist (the gist is NOT deleted)
    Unlink {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

impl Commands {
    /// Name used in the history log.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::Push { .. } => "push",
            Commands::Pull { .. } => "pull",
            Commands::Status => "status",
            Commands::Share { .. } => "share",
            Commands::Import { .. } => "import",
            Commands::Link { .. } => "link",
            Commands::Unlink { .. } => "unlink",
        }
    }
}
