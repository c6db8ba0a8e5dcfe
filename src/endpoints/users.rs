//! # GitHub User Endpoints
//!
//! GitHub API endpoint implementations for user profiles.

use anyhow::{Context, Result};
use reqwest::Method;
use tracing::instrument;

use crate::client::{GitHubClient, parse_json};
use crate::models::GitHubUser;

impl GitHubClient {
  /// Get the current authenticated user
  #[instrument(skip(self), level = "debug")]
  pub async fn get_current_user(&self) -> Result<GitHubUser> {
    let response = self
      .request(Method::GET, "/user")
      .send()
      .await
      .context("Failed to fetch GitHub user")?;

    parse_json(response, "GitHub user").await
  }

  /// Get a user's public profile by login
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
    let response = self
      .request(Method::GET, &format!("/users/{username}"))
      .send()
      .await
      .context("Failed to fetch GitHub user")?;

    parse_json(response, &format!("User {username}")).await
  }
}
