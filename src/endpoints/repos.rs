//! # GitHub Repository Endpoints
//!
//! GitHub API endpoint implementations for repository operations, including
//! listing, creating, and deleting repositories.

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::instrument;

use crate::client::{GitHubClient, expect_success, parse_json};
use crate::consts;
use crate::models::GitHubRepository;

/// Parameters for creating a repository
#[derive(Debug, Serialize)]
pub struct CreateRepositoryParams {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub private: bool,
  pub auto_init: bool,
}

impl GitHubClient {
  /// List repositories for the authenticated user
  #[instrument(skip(self), level = "debug")]
  pub async fn list_repositories(&self) -> Result<Vec<GitHubRepository>> {
    let response = self
      .request(Method::GET, "/user/repos")
      .query(&[("per_page", consts::PAGE_SIZE)])
      .send()
      .await
      .context("Failed to fetch repositories")?;

    parse_json(response, "Repositories").await
  }

  /// Get a repository by owner and name
  #[instrument(skip(self), level = "debug")]
  pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<GitHubRepository> {
    let response = self
      .request(Method::GET, &format!("/repos/{owner}/{repo}"))
      .send()
      .await
      .context("Failed to fetch repository")?;

    parse_json(response, &format!("Repository {owner}/{repo}")).await
  }

  /// Create a repository for the authenticated user
  #[instrument(skip(self, params), fields(name = %params.name), level = "debug")]
  pub async fn create_repository(&self, params: &CreateRepositoryParams) -> Result<GitHubRepository> {
    let response = self
      .request(Method::POST, "/user/repos")
      .json(params)
      .send()
      .await
      .context("Failed to create repository")?;

    parse_json(response, &format!("Repository {}", params.name)).await
  }

  /// Delete a repository
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_repository(&self, owner: &str, repo: &str) -> Result<()> {
    let response = self
      .request(Method::DELETE, &format!("/repos/{owner}/{repo}"))
      .send()
      .await
      .context("Failed to delete repository")?;

    expect_success(response, &format!("Repository {owner}/{repo}")).await
  }

  /// Check whether a repository exists.
  ///
  /// A 404 is treated as absence rather than an error.
  #[instrument(skip(self), level = "debug")]
  pub async fn repository_exists(&self, owner: &str, repo: &str) -> Result<bool> {
    let response = self
      .request(Method::GET, &format!("/repos/{owner}/{repo}"))
      .send()
      .await
      .context("Failed to fetch repository")?;

    if response.status() == StatusCode::NOT_FOUND {
      return Ok(false);
    }

    expect_success(response, &format!("Repository {owner}/{repo}")).await?;
    Ok(true)
  }
}
