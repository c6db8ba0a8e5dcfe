//! # GitHub Utility Functions
//!
//! Helper functions for GitHub URL parsing and the base64 content encoding
//! used by the contents API.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose;
use regex::Regex;

use crate::client::GitHubClient;

static GITHUB_REPO_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"github\.com[/:]([^/]+)/([^/\.]+)").expect("Failed to compile GitHub repo regex"));

impl GitHubClient {
  /// Extract owner and repo from a GitHub URL
  pub fn extract_repo_info_from_url(&self, url: &str) -> Result<(String, String)> {
    // Match patterns like:
    // https://github.com/owner/repo
    // https://github.com/owner/repo.git
    // git@github.com:owner/repo.git
    if let Some(captures) = GITHUB_REPO_REGEX.captures(url) {
      let owner = captures.get(1).unwrap().as_str().to_string();
      let repo = captures.get(2).unwrap().as_str().to_string();
      Ok((owner, repo))
    } else {
      Err(anyhow::anyhow!("Could not extract owner and repo from URL: {url}"))
    }
  }
}

/// Encode file content for the contents API
pub fn encode_content(content: &str) -> String {
  general_purpose::STANDARD.encode(content.as_bytes())
}

/// Decode base64 file content returned by the contents API.
///
/// GitHub interleaves newlines into the base64 payload, so all ASCII
/// whitespace is stripped before decoding.
pub fn decode_content(encoded: &str) -> Result<String> {
  let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
  let bytes = general_purpose::STANDARD
    .decode(compact)
    .context("Failed to decode base64 file content")?;

  String::from_utf8(bytes).context("File content is not valid UTF-8")
}
