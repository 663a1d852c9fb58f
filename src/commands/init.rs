//! `claude-sync init` - create the sync gist and link this machine to it.

use crate::commands::now_iso;
use crate::{Result, auth, codec, config, gist, paths, scan, ui};

pub fn run(yes: bool) -> Result<()> {
    // Already linked? Point at the existing gist instead of creating another.
    if let Some(existing) = config::load_config()? {
        if existing.gist_id.is_some() {
            ui::warn("Already initialized.");
            ui::dim(&format!(
                "Gist: {}",
                existing
                    .gist_url
                    .or(existing.gist_id)
                    .unwrap_or_default()
            ));
            ui::dim("Use `claude-sync push` or `claude-sync pull` to sync.");
            ui::dim("Use `claude-sync unlink` to reset.");
            return Ok(());
        }
    }

    let token = auth::get_token()?;
    let user = auth::validate_token(&token)?;
    ui::success(&format!("Authenticated as {}", user.login));

    // get_token may have stored the token; reload so we don't clobber it
    let current = config::load_config()?.unwrap_or_default();

    let scan_result = scan::scan_dir(&paths::claude_dir()?)?;
    if scan_result.files.is_empty() {
        ui::warn("No syncable files found in ~/.claude/");
        ui::dim("Make sure you have Claude Code configured before running init.");
        return Ok(());
    }

    let categories = scan::categorize(&scan_result.files);
    println!();
    ui::info(&format!("Found {} files to sync:", scan_result.files.len()));
    if !categories.settings.is_empty() {
        ui::dim(&format!("Settings: {}", categories.settings.join(", ")));
    }
    if !categories.memory.is_empty() {
        ui::dim(&format!("Memory: {}", categories.memory.join(", ")));
    }
    if !categories.agents.is_empty() {
        ui::dim(&format!("Agents: {} files", categories.agents.len()));
    }
    if !categories.skills.is_empty() {
        ui::dim(&format!("Skills: {} files", categories.skills.len()));
    }
    if !categories.rules.is_empty() {
        ui::dim(&format!("Rules: {} files", categories.rules.len()));
    }
    println!();

    if !yes && !ui::confirm("Create a secret gist to store your config?", true)? {
        ui::dim("Cancelled.");
        return Ok(());
    }

    let gist_files = codec::file_map_to_gist_files(&scan_result.files);
    let created = gist::create_gist(&token, &gist_files, false)?;

    config::save_config(&config::SyncConfig {
        gist_id: Some(created.id.clone()),
        gist_url: Some(created.html_url.clone()),
        username: Some(user.login),
        created_at: Some(now_iso()),
        last_push: Some(now_iso()),
        ..current
    })?;

    println!();
    ui::success(&format!("Initialized! Gist: {}", created.html_url));
    ui::dim("Run `claude-sync push` to upload changes.");
    ui::dim("Run `claude-sync pull` on another machine to sync.");
    Ok(())
}
