//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling
//! authentication, request building, and response parsing for GitHub REST API
//! operations.

use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::consts;

/// Represents a GitHub API client
#[derive(Debug)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) token: String,
}

impl GitHubClient {
  /// Create a new GitHub client from a personal access token
  pub fn new(token: &str) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: consts::API_BASE_URL.to_string(),
      token: token.to_string(),
    }
  }

  /// Build a request for an API path with the standard headers attached.
  ///
  /// Every endpoint method funnels through here so that authentication and
  /// header handling live in exactly one place.
  pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
    let url = format!("{}{}", self.base_url, path);

    self
      .client
      .request(method, &url)
      .header("Accept", consts::ACCEPT)
      .header("User-Agent", consts::USER_AGENT)
      .bearer_auth(&self.token)
  }

  /// Test the GitHub connection by fetching the current user
  pub async fn test_connection(&self) -> Result<bool> {
    let response = self
      .request(Method::GET, "/user")
      .send()
      .await
      .context("Failed to connect to GitHub")?;

    Ok(response.status().is_success())
  }
}

/// Create a GitHub client from a personal access token
pub fn create_github_client(token: &str) -> Result<GitHubClient> {
  if token.is_empty() {
    return Err(anyhow::anyhow!("GitHub token must not be empty"));
  }

  Ok(GitHubClient::new(token))
}

/// Parse a JSON response body into the expected shape, mapping non-success
/// statuses onto errors.
///
/// `what` names the resource for error messages, e.g. "Repository owner/repo".
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
  match response.status() {
    status if status.is_success() => {
      // First get the response body as text
      let body = response.text().await.context("Failed to read response body")?;

      // Then try to parse it as JSON
      match serde_json::from_str::<T>(&body) {
        Ok(value) => Ok(value),
        Err(e) => {
          // Try to extract the error message from the response
          if let Ok(error_json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(message) = error_json.get("message").and_then(|m| m.as_str()) {
              return Err(anyhow::anyhow!("Failed to parse {}: GitHub API error: {}", what, message));
            }
          }
          // Fall back to the original error if we can't extract a message
          Err(anyhow::anyhow!("Failed to parse {}: {}", what, e))
        }
      }
    }
    StatusCode::NOT_FOUND => Err(anyhow::anyhow!("{what} not found")),
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
      "Authentication failed. Please check your GitHub credentials."
    )),
    status => Err(anyhow::anyhow!(
      "Unexpected error: HTTP {} - {}",
      status,
      response.text().await.unwrap_or_default()
    )),
  }
}

/// Check a response for a success status when no body is expected, mapping
/// non-success statuses onto errors the same way as [`parse_json`].
pub(crate) async fn expect_success(response: Response, what: &str) -> Result<()> {
  match response.status() {
    status if status.is_success() => Ok(()),
    StatusCode::NOT_FOUND => Err(anyhow::anyhow!("{what} not found")),
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
      "Authentication failed. Please check your GitHub credentials."
    )),
    status => Err(anyhow::anyhow!(
      "Unexpected error: HTTP {} - {}",
      status,
      response.text().await.unwrap_or_default()
    )),
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  /// Test that the client can be created with a token
  #[tokio::test]
  async fn test_client_creation() -> Result<()> {
    let client = GitHubClient::new("test_token");

    assert_eq!(client.base_url, "https://api.github.com");
    assert_eq!(client.token, "test_token");

    Ok(())
  }

  #[test]
  fn test_create_github_client_rejects_empty_token() {
    let error = create_github_client("").unwrap_err().to_string();
    assert!(error.contains("must not be empty"));

    assert!(create_github_client("gh-token").is_ok());
  }

  /// Test that the client sends a bearer Authorization header
  #[tokio::test]
  async fn test_client_auth() -> Result<()> {
    let mock_server = MockServer::start().await;
    let mut client = GitHubClient::new("test_token");
    client.base_url = mock_server.uri();

    Mock::given(method("GET"))
      .and(path("/user"))
      .and(header("Authorization", "Bearer test_token"))
      .and(header("Accept", consts::ACCEPT))
      .and(header("User-Agent", consts::USER_AGENT))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "login": "testuser",
          "id": 1234,
          "name": "Test User"
      })))
      .mount(&mock_server)
      .await;

    assert!(client.test_connection().await?);

    Ok(())
  }

  #[tokio::test]
  async fn test_test_connection_failure() -> Result<()> {
    let mock_server = MockServer::start().await;
    let mut client = GitHubClient::new("bad_token");
    client.base_url = mock_server.uri();

    Mock::given(method("GET"))
      .and(path("/user"))
      .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
          "message": "Bad credentials"
      })))
      .mount(&mock_server)
      .await;

    assert!(!client.test_connection().await?);

    Ok(())
  }
}
