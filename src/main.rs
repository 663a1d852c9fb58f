//! claude-sync CLI - sync Claude Code configuration through a GitHub gist.

use clap::Parser;
use std::process;
use std::time::Instant;

use claude_sync::cli::{Cli, Commands};
use claude_sync::{commands, history};

fn main() {
    let cli = Cli::parse();
    let command_name = cli.command.name();

    let start = Instant::now();
    let result = run_command(cli.command);
    let duration = start.elapsed().as_millis() as u64;

    let (success, error) = match &result {
        Ok(_) => (true, None),
        Err(e) => (false, Some(e.to_string())),
    };
    history::log_command(command_name, success, error, duration);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands) -> claude_sync::Result<()> {
    match command {
        Commands::Init { yes } => commands::init::run(yes),
        Commands::Push { force } => commands::push::run(force),
        Commands::Pull { force } => commands::pull::run(force),
        Commands::Status => commands::status::run(),
        Commands::Share { yes } => commands::share::run(yes),
        Commands::Import { url_or_id, all } => commands::import::run(&url_or_id, all),
        Commands::Link { url_or_id } => commands::link::run(&url_or_id),
        Commands::Unlink { yes } => commands::unlink::run(yes),
    }
}
