//! `claude-sync link` - attach this machine to an existing sync gist.

use crate::{Result, auth, config, gist, ui};

pub fn run(url_or_id: &str) -> Result<()> {
    let gist_id = gist::parse_gist_id(url_or_id)?;

    let token = auth::get_token()?;
    let user = auth::validate_token(&token)?;

    // Confirm the gist exists and is readable before persisting anything
    let remote = gist::get_gist(&token, &gist_id)?;

    let current = config::load_config()?.unwrap_or_default();
    config::save_config(&config::SyncConfig {
        gist_id: Some(remote.id.clone()),
        gist_url: Some(remote.html_url.clone()),
        username: Some(user.login),
        ..current
    })?;

    ui::success(&format!("Linked to gist: {}", remote.html_url));
    ui::dim("Run `claude-sync pull` to download your config.");
    Ok(())
}
