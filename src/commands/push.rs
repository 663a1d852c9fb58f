//! `claude-sync push` - upload local changes to the linked gist.
//!
//! Diff direction: local is `source`, remote is `target`, so `added` means
//! local-only and `removed` means the entry is gone locally and gets
//! deleted from the gist.

use std::collections::BTreeMap;

use crate::commands::now_iso;
use crate::diff::{SyncDiff, compute_diff, diff_summary, has_differences};
use crate::{Result, auth, codec, config, gist, paths, scan, ui};

pub fn run(force: bool) -> Result<()> {
    let mut cfg = config::require_config()?;
    let Some(gist_id) = cfg.gist_id.clone() else {
        return Err(crate::Error::NotInitialized);
    };
    let token = auth::get_token()?;

    let scan_result = scan::scan_dir(&paths::claude_dir()?)?;
    let remote = gist::get_gist(&token, &gist_id)?;
    let remote_files = codec::gist_files_to_file_map(
        remote
            .files
            .iter()
            .map(|(name, file)| (name.as_str(), file.content.as_str())),
    );

    let diff = compute_diff(&scan_result.files, &remote_files);
    if !has_differences(&diff) {
        ui::success("Everything up to date.");
        return Ok(());
    }

    println!();
    ui::info(&format!("Changes to push ({}):", diff_summary(&diff)));
    for change in &diff.added {
        ui::added(&change.path);
    }
    for change in &diff.modified {
        ui::modified(&change.path);
    }
    for change in &diff.removed {
        ui::removed(&change.path);
    }
    println!();

    if !force && !ui::confirm("Push these changes?", true)? {
        ui::dim("Cancelled.");
        return Ok(());
    }

    let updates = build_updates(&diff);
    gist::update_gist(&token, &gist_id, &updates)?;

    cfg.last_push = Some(now_iso());
    config::save_config(&cfg)?;

    let total = diff.added.len() + diff.modified.len() + diff.removed.len();
    ui::success(&format!("Pushed {} changes to gist.", total));
    Ok(())
}

/// Build the gist update payload from a push-direction diff. Added and
/// modified entries upload local content under encoded names; removed
/// entries become null deletions in the gist API.
pub fn build_updates(diff: &SyncDiff) -> BTreeMap<String, Option<String>> {
    let mut updates: BTreeMap<String, Option<String>> = BTreeMap::new();
    for change in diff.added.iter().chain(&diff.modified) {
        if let Some(content) = change.local_content.clone() {
            updates.insert(codec::encode(&change.path), Some(content));
        }
    }
    for change in &diff.removed {
        updates.insert(codec::encode(&change.path), None);
    }
    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::FileMap;

    fn file_map(entries: &[(&str, &str)]) -> FileMap {
        entries
            .iter()
            .map(|(p, c)| (p.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn test_added_and_modified_upload_local_content() {
        let local = file_map(&[
            ("settings.json", "{\"v\":2}"),
            ("rules/new.md", "# new"),
        ]);
        let remote = file_map(&[("settings.json", "{\"v\":1}")]);

        let updates = build_updates(&compute_diff(&local, &remote));
        assert_eq!(
            updates.get("settings.json").unwrap().as_deref(),
            Some("{\"v\":2}")
        );
        assert_eq!(
            updates.get("rules__new.md").unwrap().as_deref(),
            Some("# new")
        );
    }

    #[test]
    fn test_removed_paths_map_to_null_deletions() {
        let local = file_map(&[("CLAUDE.md", "memory")]);
        let remote = file_map(&[
            ("CLAUDE.md", "memory"),
            ("agents/old/AGENT.md", "# old"),
        ]);

        let updates = build_updates(&compute_diff(&local, &remote));
        assert_eq!(updates.len(), 1);
        assert!(updates.get("agents__old__AGENT.md").unwrap().is_none());
    }

    #[test]
    fn test_unchanged_entries_are_not_uploaded() {
        let same = file_map(&[("settings.json", "{}"), ("CLAUDE.md", "memory")]);
        let updates = build_updates(&compute_diff(&same, &same));
        assert!(updates.is_empty());
    }
}
