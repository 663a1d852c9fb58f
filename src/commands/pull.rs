//! `claude-sync pull` - apply remote changes to this machine.
//!
//! Diff direction: remote is `source`, local is `target`. That means
//! `added` entries are remote-only (their content rides in
//! `local_content`, the source side), and `removed` entries exist only
//! locally. Force mode writes everything incoming but never deletes a
//! local-only file; deletion requires an explicit interactive decision.
//! Every overwrite or delete is preceded by a backup snapshot.

use std::fs;
use std::path::Path;

use crate::commands::now_iso;
use crate::diff::{SyncDiff, compute_diff, diff_summary, has_differences};
use crate::resolve::{ConflictResolver, InteractiveResolver, Resolution};
use crate::{Result, auth, backup, codec, config, gist, paths, scan, ui};

/// Counts of what a pull actually did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PullOutcome {
    pub pulled: usize,
    pub skipped: usize,
}

pub fn run(force: bool) -> Result<()> {
    let mut cfg = config::require_config()?;
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

    let diff = compute_diff(&remote_files, &scan_result.files);
    if !has_differences(&diff) {
        ui::success("Everything up to date.");
        return Ok(());
    }

    println!();
    ui::info(&format!("Changes available from remote ({}):", diff_summary(&diff)));
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

    let mut resolver = InteractiveResolver;
    let outcome = apply(
        &diff,
        &paths::claude_dir()?,
        &paths::backups_dir()?,
        force,
        &mut resolver,
    )?;

    cfg.last_pull = Some(now_iso());
    config::save_config(&cfg)?;

    println!();
    ui::success(&format!(
        "Pulled {} changes. {} skipped.",
        outcome.pulled, outcome.skipped
    ));
    Ok(())
}

/// Apply a pull-direction diff to the local tree.
///
/// Separated from [`run`] so tests can drive it with a scripted resolver
/// and temp directories.
pub fn apply(
    diff: &SyncDiff,
    claude_dir: &Path,
    backups_dir: &Path,
    force: bool,
    resolver: &mut dyn ConflictResolver,
) -> Result<PullOutcome> {
    let mut outcome = PullOutcome::default();

    // New files: exist remotely, not locally
    for change in &diff.added {
        let Some(content) = change.local_content.as_deref() else {
            continue;
        };
        if force {
            write_local(claude_dir, &change.path, content)?;
            outcome.pulled += 1;
            continue;
        }

        ui::info(&format!("New file: {}", change.path));
        ui::preview(content, 10);
        if resolver.confirm(&format!("Import {}?", change.path), true)? {
            write_local(claude_dir, &change.path, content)?;
            outcome.pulled += 1;
        } else {
            outcome.skipped += 1;
        }
    }

    // Modified files: remote content wins on TakeRemote, after a backup
    for change in &diff.modified {
        let Some(remote_content) = change.local_content.as_deref() else {
            continue;
        };
        let decision = if force {
            Resolution::TakeRemote
        } else {
            ui::info(&format!("Modified: {}", change.path));
            resolver.resolve(&change.path)?
        };

        if decision == Resolution::TakeRemote {
            let dest = claude_dir.join(&change.path);
            backup::backup_file(backups_dir, &dest, &change.path)?;
            write_local(claude_dir, &change.path, remote_content)?;
            outcome.pulled += 1;
        } else {
            outcome.skipped += 1;
        }
    }

    // Local-only files: force mode never deletes them. Taking the remote
    // side here means accepting the deletion, so it stays behind an
    // explicit interactive decision.
    for change in &diff.removed {
        if force {
            outcome.skipped += 1;
            continue;
        }

        ui::info(&format!(
            "File {} exists locally but not in remote.",
            change.path
        ));
        if resolver.resolve(&change.path)? == Resolution::TakeRemote {
            let dest = claude_dir.join(&change.path);
            backup::backup_file(backups_dir, &dest, &change.path)?;
            match fs::remove_file(&dest) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
            outcome.pulled += 1;
        } else {
            outcome.skipped += 1;
        }
    }

    Ok(outcome)
}

fn write_local(claude_dir: &Path, relative_path: &str, content: &str) -> Result<()> {
    let dest = claude_dir.join(relative_path);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dest, content)?;
    Ok(())
}
