//! GitHub Gists API client.
//!
//! The gist is the single remote snapshot: a flat filename -> content map
//! plus one reserved metadata entry recording who pushed last and when.
//! The metadata entry is rebuilt on every create/update and must never leak
//! into a [`crate::scan::FileMap`] (see [`crate::codec`]).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

use crate::{Error, Result};

/// GitHub API base URL.
const GITHUB_API_BASE: &str = "https://api.github.com";

/// User-Agent header required by the GitHub API.
const USER_AGENT: &str = "claude-sync-cli";

/// Reserved metadata entry, excluded from every derived FileMap.
pub const META_FILENAME: &str = ".claude-sync-meta.json";

/// Description attached to the sync gist.
const GIST_DESCRIPTION: &str = "Claude Code configuration (managed by claude-sync)";

/// A single file within a gist (only the fields we care about).
#[derive(Debug, Clone, Deserialize)]
pub struct GistFile {
    pub content: String,
    #[serde(default)]
    pub truncated: bool,
}

/// Gist owner.
#[derive(Debug, Clone, Deserialize)]
pub struct GistOwner {
    pub login: String,
}

/// A gist as returned by the API (only the fields we care about).
#[derive(Debug, Clone, Deserialize)]
pub struct Gist {
    pub id: String,
    pub html_url: String,
    #[serde(default)]
    pub public: bool,
    pub files: BTreeMap<String, GistFile>,
    pub owner: Option<GistOwner>,
}

/// Contents of the reserved metadata entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncMeta {
    pub version: String,
    pub last_push: String,
    pub last_push_machine: String,
}

/// Build a fresh metadata entry for the current push.
pub fn build_meta() -> SyncMeta {
    let machine = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());

    SyncMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        last_push: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        last_push_machine: machine,
    }
}

fn meta_json() -> Result<serde_json::Value> {
    Ok(json!({ "content": serde_json::to_string_pretty(&build_meta())? }))
}

fn authed(request: ureq::Request, token: &str) -> ureq::Request {
    request
        .set("Authorization", &format!("Bearer {}", token))
        .set("Accept", "application/vnd.github+json")
        .set("User-Agent", USER_AGENT)
        .set("X-GitHub-Api-Version", "2022-11-28")
}

fn anonymous(request: ureq::Request) -> ureq::Request {
    request
        .set("Accept", "application/vnd.github+json")
        .set("User-Agent", USER_AGENT)
        .set("X-GitHub-Api-Version", "2022-11-28")
}

fn map_error(err: ureq::Error, gist_id: Option<&str>) -> Error {
    match err {
        ureq::Error::Status(401, _) => Error::Unauthorized,
        ureq::Error::Status(403, _) => Error::Forbidden,
        ureq::Error::Status(404, _) => match gist_id {
            Some(id) => Error::GistNotFound(id.to_string()),
            None => Error::Http("HTTP 404".to_string()),
        },
        ureq::Error::Status(code, resp) => {
            let body = resp.into_string().unwrap_or_default();
            Error::Http(format!("HTTP {}: {}", code, body))
        }
        e => Error::Http(e.to_string()),
    }
}

fn parse_gist(resp: ureq::Response) -> Result<Gist> {
    resp.into_json::<Gist>()
        .map_err(|e| Error::Http(format!("failed to parse gist response: {}", e)))
}

/// Create a gist holding `files` plus the metadata entry.
pub fn create_gist(token: &str, files: &BTreeMap<String, String>, public: bool) -> Result<Gist> {
    let mut gist_files = serde_json::Map::new();
    for (name, content) in files {
        gist_files.insert(name.clone(), json!({ "content": content }));
    }
    gist_files.insert(META_FILENAME.to_string(), meta_json()?);

    let body = json!({
        "description": GIST_DESCRIPTION,
        "public": public,
        "files": gist_files,
    });

    let url = format!("{}/gists", GITHUB_API_BASE);
    let resp = authed(ureq::post(&url), token)
        .send_json(body)
        .map_err(|e| map_error(e, None))?;
    parse_gist(resp)
}

/// Fetch a gist the token can read.
pub fn get_gist(token: &str, gist_id: &str) -> Result<Gist> {
    let url = format!("{}/gists/{}", GITHUB_API_BASE, gist_id);
    let resp = authed(ureq::get(&url), token)
        .call()
        .map_err(|e| map_error(e, Some(gist_id)))?;
    parse_gist(resp)
}

/// Fetch a public gist without authentication (used by `import`).
pub fn get_public_gist(gist_id: &str) -> Result<Gist> {
    let url = format!("{}/gists/{}", GITHUB_API_BASE, gist_id);
    let resp = anonymous(ureq::get(&url))
        .call()
        .map_err(|e| map_error(e, Some(gist_id)))?;
    parse_gist(resp)
}

/// Update a gist. A `None` value deletes that entry; the metadata entry is
/// always refreshed.
pub fn update_gist(
    token: &str,
    gist_id: &str,
    files: &BTreeMap<String, Option<String>>,
) -> Result<Gist> {
    let mut gist_files = serde_json::Map::new();
    for (name, content) in files {
        let value = match content {
            Some(content) => json!({ "content": content }),
            None => serde_json::Value::Null,
        };
        gist_files.insert(name.clone(), value);
    }
    gist_files.insert(META_FILENAME.to_string(), meta_json()?);

    let body = json!({ "files": gist_files });

    let url = format!("{}/gists/{}", GITHUB_API_BASE, gist_id);
    let resp = authed(ureq::request("PATCH", &url), token)
        .send_json(body)
        .map_err(|e| map_error(e, Some(gist_id)))?;
    parse_gist(resp)
}

/// Extract a gist ID from a plain hex ID or a gist.github.com URL.
pub fn parse_gist_id(url_or_id: &str) -> Result<String> {
    fn is_hex_id(s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    }

    if is_hex_id(url_or_id) {
        return Ok(url_or_id.to_string());
    }

    // URL forms: gist.github.com/{user}/{id} or gist.github.com/{id}
    let without_scheme = url_or_id
        .strip_prefix("https://")
        .or_else(|| url_or_id.strip_prefix("http://"))
        .unwrap_or(url_or_id);

    if let Some(path) = without_scheme.strip_prefix("gist.github.com/") {
        if let Some(id) = path.split('/').filter(|s| !s.is_empty()).last() {
            if is_hex_id(id) {
                return Ok(id.to_string());
            }
        }
    }

    Err(Error::InvalidGistId(url_or_id.to_string()))
}
