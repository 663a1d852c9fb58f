//! `claude-sync import` - selectively copy files from someone else's
//! public gist into the local tree.
//!
//! No authentication and no link required. Existing local files are only
//! overwritten after an explicit confirmation, and always behind a backup.

use std::fs;

use crate::{Result, backup, codec, gist, paths, scan, ui};

pub fn run(url_or_id: &str, all: bool) -> Result<()> {
    let gist_id = gist::parse_gist_id(url_or_id)?;
    let remote = gist::get_public_gist(&gist_id)?;

    let owner = remote
        .owner
        .as_ref()
        .map(|o| o.login.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let remote_files = codec::gist_files_to_file_map(
        remote
            .files
            .iter()
            .map(|(name, file)| (name.as_str(), file.content.as_str())),
    );

    if remote_files.is_empty() {
        ui::warn("No importable files found in this gist.");
        return Ok(());
    }

    println!();
    ui::info(&format!("Available items from @{}:", owner));
    let categories = scan::categorize(&remote_files);
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

    let all_paths: Vec<String> = remote_files.keys().cloned().collect();
    let selected = if all {
        all_paths
    } else {
        ui::select_multiple("Select items to import:", &all_paths)?
    };

    if selected.is_empty() {
        ui::dim("No items selected. Cancelled.");
        return Ok(());
    }

    let claude_dir = paths::claude_dir()?;
    let backups_dir = paths::backups_dir()?;
    let mut imported = 0;
    let mut skipped = 0;

    for path in &selected {
        let Some(content) = remote_files.get(path) else {
            continue;
        };
        let dest = claude_dir.join(path);

        if dest.exists() {
            let local_content = fs::read_to_string(&dest)?;
            if &local_content == content {
                ui::dim(&format!("{} (identical, skipping)", path));
                skipped += 1;
                continue;
            }

            println!();
            ui::info(&format!("{} already exists locally. Incoming version:", path));
            ui::preview(content, 10);
            println!();

            let overwrite = all || ui::confirm(&format!("Overwrite {}?", path), false)?;
            if overwrite {
                backup::backup_file(&backups_dir, &dest, path)?;
                write_local(&dest, content)?;
                imported += 1;
            } else {
                skipped += 1;
            }
        } else {
            write_local(&dest, content)?;
            imported += 1;
        }
    }

    println!();
    ui::success(&format!(
        "Imported {} items from @{}. {} skipped.",
        imported, owner, skipped
    ));
    Ok(())
}

fn write_local(dest: &std::path::Path, content: &str) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, content)?;
    Ok(())
}
