//! `claude-sync status` - show the local vs remote diff without changing
//! anything.

use crate::diff::{compute_diff, has_differences};
use crate::gist::{META_FILENAME, SyncMeta};
use crate::{Result, auth, codec, config, gist, paths, scan, ui};

pub fn run() -> Result<()> {
    let cfg = config::require_config()?;
    let Some(gist_id) = cfg.gist_id.clone() else {
        return Err(crate::Error::NotInitialized);
    };
    let token = auth::get_token()?;

    let remote = gist::get_gist(&token, &gist_id)?;
    let remote_files = codec::gist_files_to_file_map(
        remote
            .files
            .iter()
            .map(|(name, file)| (name.as_str(), file.content.as_str())),
    );
    let scan_result = scan::scan_dir(&paths::claude_dir()?)?;

    // Push direction: added = local only, removed = remote only
    let diff = compute_diff(&scan_result.files, &remote_files);

    println!();
    println!("Local <-> Remote status:");
    println!();
    for change in &diff.unchanged {
        ui::synced(&change.path);
    }
    for change in &diff.modified {
        ui::modified_status(&change.path);
    }
    for change in &diff.added {
        ui::local_only(&change.path);
    }
    for change in &diff.removed {
        ui::remote_only(&change.path);
    }
    println!();

    if !has_differences(&diff) {
        ui::success("Everything in sync.");
    } else {
        let total = diff.added.len() + diff.modified.len() + diff.removed.len();
        ui::info(&format!("{} files out of sync.", total));
    }

    // Remote metadata is informational; a malformed entry is not an error
    if let Some(meta_file) = remote.files.get(META_FILENAME) {
        if let Ok(meta) = serde_json::from_str::<SyncMeta>(&meta_file.content) {
            println!();
            ui::dim(&format!(
                "Last push: {} from {}",
                meta.last_push, meta.last_push_machine
            ));
        }
    }
    if let Some(last_pull) = &cfg.last_pull {
        ui::dim(&format!("Last pull: {}", last_pull));
    }

    Ok(())
}
