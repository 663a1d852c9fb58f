//! `claude-sync share` - publish selected config files as a public gist.
//!
//! This is the one path where content becomes world-readable, so the
//! sensitive-data flag from the scan triggers a loud warning before
//! anything leaves the machine. Contents in the scan result are already
//! redacted.

use crate::redact::SENSITIVE_WARNING;
use crate::scan::FileMap;
use crate::{Result, auth, codec, gist, paths, scan, ui};

pub fn run(yes: bool) -> Result<()> {
    let token = auth::get_token()?;

    let scan_result = scan::scan_dir(&paths::claude_dir()?)?;

    if scan_result.has_sensitive_data {
        println!();
        ui::error("CRITICAL: Sensitive data detected in your files!");
        ui::warn(SENSITIVE_WARNING);
        println!();
        if !yes && !ui::confirm("Continue anyway? (Not recommended!)", false)? {
            ui::dim("Cancelled.");
            return Ok(());
        }
    }

    if scan_result.files.is_empty() {
        ui::warn("No syncable files found in ~/.claude/");
        return Ok(());
    }

    println!();
    ui::warn("This creates a PUBLIC gist. Make sure no sensitive data is included.");
    println!();

    let all_paths: Vec<String> = scan_result.files.keys().cloned().collect();
    let selected = if yes {
        all_paths
    } else {
        ui::select_multiple("Select files to share:", &all_paths)?
    };

    if selected.is_empty() {
        ui::dim("No files selected. Cancelled.");
        return Ok(());
    }

    println!();
    ui::info(&format!("Sharing {} files publicly.", selected.len()));
    if !yes && !ui::confirm("Continue?", true)? {
        ui::dim("Cancelled.");
        return Ok(());
    }

    let mut files = FileMap::new();
    for path in &selected {
        if let Some(content) = scan_result.files.get(path) {
            files.insert(path.clone(), content.clone());
        }
    }

    let gist_files = codec::file_map_to_gist_files(&files);
    let created = gist::create_gist(&token, &gist_files, true)?;

    println!();
    ui::success("Shared! Anyone can import with:");
    println!();
    println!("  claude-sync import {}", created.html_url);
    println!();
    Ok(())
}
