//! `claude-sync unlink` - forget the gist link on this machine.
//!
//! Only the local config file is removed; the gist itself is untouched.

use crate::{Result, config, ui};

pub fn run(yes: bool) -> Result<()> {
    let Some(cfg) = config::load_config()? else {
        ui::warn("Not currently linked to any gist.");
        return Ok(());
    };
    if cfg.gist_id.is_none() {
        ui::warn("Not currently linked to any gist.");
        return Ok(());
    }

    ui::info(&format!(
        "Currently linked to: {}",
        cfg.gist_url.or(cfg.gist_id).unwrap_or_default()
    ));

    if !yes && !ui::confirm("Unlink from gist? (local config stays, gist is NOT deleted)", true)? {
        ui::dim("Cancelled.");
        return Ok(());
    }

    config::remove_config()?;
    ui::success("Unlinked. Run `claude-sync init` or `claude-sync link` to reconnect.");
    Ok(())
}
