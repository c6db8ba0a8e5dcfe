//! # GitHub Commit Endpoints
//!
//! GitHub API endpoint implementations for reading commit history.

use anyhow::{Context, Result};
use reqwest::Method;
use tracing::instrument;

use crate::client::{GitHubClient, parse_json};
use crate::consts;
use crate::models::GitHubCommit;

impl GitHubClient {
  /// List commits for a repository, optionally scoped to a branch
  #[instrument(skip(self), level = "debug")]
  pub async fn list_commits(&self, owner: &str, repo: &str, branch: Option<&str>) -> Result<Vec<GitHubCommit>> {
    let mut request = self
      .request(Method::GET, &format!("/repos/{owner}/{repo}/commits"))
      .query(&[("per_page", consts::PAGE_SIZE)]);

    if let Some(branch) = branch {
      request = request.query(&[("sha", branch)]);
    }

    let response = request.send().await.context("Failed to fetch commits")?;

    parse_json(response, "Commits").await
  }

  /// Get a single commit by sha
  #[instrument(skip(self), level = "debug")]
  pub async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<GitHubCommit> {
    let response = self
      .request(Method::GET, &format!("/repos/{owner}/{repo}/commits/{sha}"))
      .send()
      .await
      .context("Failed to fetch commit")?;

    parse_json(response, &format!("Commit {sha}")).await
  }
}
