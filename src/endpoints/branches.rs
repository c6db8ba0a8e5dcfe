//! # GitHub Branch Endpoints
//!
//! GitHub API endpoint implementations for branch operations, including
//! listing branches and creating or deleting git references.

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::instrument;

use crate::client::{GitHubClient, expect_success, parse_json};
use crate::consts;
use crate::models::{GitHubBranch, GitHubRef};

/// Request body for creating a git reference
#[derive(Debug, Serialize)]
struct CreateRefRequest {
  #[serde(rename = "ref")]
  ref_name: String,
  sha: String,
}

impl GitHubClient {
  /// List branches for a repository
  #[instrument(skip(self), level = "debug")]
  pub async fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<GitHubBranch>> {
    let response = self
      .request(Method::GET, &format!("/repos/{owner}/{repo}/branches"))
      .query(&[("per_page", consts::PAGE_SIZE)])
      .send()
      .await
      .context("Failed to fetch branches")?;

    parse_json(response, "Branches").await
  }

  /// Get a single branch
  #[instrument(skip(self), level = "debug")]
  pub async fn get_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<GitHubBranch> {
    let response = self
      .request(Method::GET, &format!("/repos/{owner}/{repo}/branches/{branch}"))
      .send()
      .await
      .context("Failed to fetch branch")?;

    parse_json(response, &format!("Branch {branch}")).await
  }

  /// Check whether a branch exists.
  ///
  /// A 404 is treated as absence rather than an error.
  #[instrument(skip(self), level = "debug")]
  pub async fn branch_exists(&self, owner: &str, repo: &str, branch: &str) -> Result<bool> {
    let response = self
      .request(Method::GET, &format!("/repos/{owner}/{repo}/branches/{branch}"))
      .send()
      .await
      .context("Failed to fetch branch")?;

    if response.status() == StatusCode::NOT_FOUND {
      return Ok(false);
    }

    expect_success(response, &format!("Branch {branch}")).await?;
    Ok(true)
  }

  /// Create a branch pointing at the tip of an existing branch.
  ///
  /// Resolves the source branch first, then creates the new git reference.
  #[instrument(skip(self), level = "debug")]
  pub async fn create_branch(&self, owner: &str, repo: &str, new_branch: &str, from_branch: &str) -> Result<GitHubRef> {
    let source = self
      .get_branch(owner, repo, from_branch)
      .await
      .with_context(|| format!("Failed to resolve source branch {from_branch}"))?;

    let body = CreateRefRequest {
      ref_name: format!("refs/heads/{new_branch}"),
      sha: source.commit.sha,
    };

    let response = self
      .request(Method::POST, &format!("/repos/{owner}/{repo}/git/refs"))
      .json(&body)
      .send()
      .await
      .context("Failed to create branch")?;

    parse_json(response, &format!("Branch {new_branch}")).await
  }

  /// Delete a branch by removing its git reference
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<()> {
    let response = self
      .request(Method::DELETE, &format!("/repos/{owner}/{repo}/git/refs/heads/{branch}"))
      .send()
      .await
      .context("Failed to delete branch")?;

    expect_success(response, &format!("Branch {branch}")).await
  }
}
