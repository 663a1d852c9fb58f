//! GitHub token resolution and validation.
//!
//! Token precedence: `gh` CLI > `GITHUB_TOKEN` env var > stored config >
//! interactive prompt. A token obtained by prompting is saved back into the
//! config so the question is only asked once.

use serde::Deserialize;
use std::env;
use std::process::Command;

use crate::config::{self, SyncConfig};
use crate::ui;
use crate::{Error, Result};

/// GitHub API base URL.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// User-Agent header required by the GitHub API.
const USER_AGENT: &str = "claude-sync-cli";

/// Response from GitHub GET /user (only the fields we care about).
#[derive(Debug, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
}

/// Ask the `gh` CLI for its token, if installed and authenticated.
fn gh_cli_token() -> Option<String> {
    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let token = String::from_utf8(output.stdout).ok()?.trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}

/// Resolve a GitHub token, prompting as a last resort.
pub fn get_token() -> Result<String> {
    if let Some(token) = gh_cli_token() {
        return Ok(token);
    }

    if let Ok(token) = env::var("GITHUB_TOKEN") {
        if !token.is_empty() {
            return Ok(token);
        }
    }

    let stored = config::load_config()?;
    if let Some(token) = stored.as_ref().and_then(|c| c.token.clone()) {
        return Ok(token);
    }

    ui::info("No GitHub token found. You need a token with \"gist\" scope.");
    ui::dim("Create one at: https://github.com/settings/tokens/new?scopes=gist");
    println!();

    let token = ui::prompt_token("Enter your GitHub Personal Access Token: ")?;
    if token.is_empty() {
        return Err(Error::NoToken);
    }

    // Save for future runs
    let mut updated = stored.unwrap_or_else(SyncConfig::default);
    updated.token = Some(token.clone());
    config::save_config(&updated)?;

    Ok(token)
}

/// Validate a token via GET /user.
///
/// Cheap call confirming the token works before anything touches a gist.
/// 401 maps to [`Error::Unauthorized`].
pub fn validate_token(token: &str) -> Result<GitHubUser> {
    let url = format!("{}/user", GITHUB_API_BASE);

    let response = ureq::get(&url)
        .set("Authorization", &format!("Bearer {}", token))
        .set("Accept", "application/vnd.github+json")
        .set("User-Agent", USER_AGENT)
        .set("X-GitHub-Api-Version", "2022-11-28")
        .call();

    match response {
        Ok(resp) => resp
            .into_json::<GitHubUser>()
            .map_err(|e| Error::Http(format!("failed to parse user response: {}", e))),
        Err(ureq::Error::Status(401, _)) => Err(Error::Unauthorized),
        Err(ureq::Error::Status(403, _)) => Err(Error::Forbidden),
        Err(ureq::Error::Status(code, resp)) => {
            let body = resp.into_string().unwrap_or_default();
            Err(Error::Http(format!("HTTP {}: {}", code, body)))
        }
        Err(e) => Err(Error::Http(e.to_string())),
    }
}
