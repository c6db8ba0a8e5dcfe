//! # GitHub Contents Endpoints
//!
//! GitHub API endpoint implementations for file content operations, including
//! reading, writing, and deleting files through the contents API.
//!
//! The contents API transports file bodies as base64. Writes are keyed by the
//! current blob sha: a `PUT` without a sha creates the file and a `PUT` with
//! the current sha updates it, which is what the create-vs-update fallback
//! logic in this module is built around.

use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::client::{GitHubClient, parse_json};
use crate::models::{FileWriteResult, GitHubContent};
use crate::utils::{decode_content, encode_content};

/// A file to upload with the batch helper
#[derive(Debug, Clone)]
pub struct RepositoryFile {
  pub path: String,
  pub content: String,
}

/// Request body for creating or updating a file
#[derive(Debug, Serialize)]
struct FileWriteRequest {
  message: String,
  content: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  sha: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  branch: Option<String>,
}

/// Request body for deleting a file
#[derive(Debug, Serialize)]
struct FileDeleteRequest {
  message: String,
  sha: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  branch: Option<String>,
}

fn with_ref(request: RequestBuilder, reference: Option<&str>) -> RequestBuilder {
  match reference {
    Some(reference) => request.query(&[("ref", reference)]),
    None => request,
  }
}

impl GitHubClient {
  /// Get a file descriptor, including its base64 content
  #[instrument(skip(self), level = "debug")]
  pub async fn get_file(&self, owner: &str, repo: &str, path: &str, reference: Option<&str>) -> Result<GitHubContent> {
    let request = self.request(Method::GET, &format!("/repos/{owner}/{repo}/contents/{path}"));
    let response = with_ref(request, reference)
      .send()
      .await
      .context("Failed to fetch file")?;

    parse_json(response, &format!("File {path}")).await
  }

  /// Get a file's decoded text content
  #[instrument(skip(self), level = "debug")]
  pub async fn get_file_text(&self, owner: &str, repo: &str, path: &str, reference: Option<&str>) -> Result<String> {
    let file = self.get_file(owner, repo, path, reference).await?;
    let encoded = file
      .content
      .ok_or_else(|| anyhow::anyhow!("File {path} has no inline content"))?;

    decode_content(&encoded).with_context(|| format!("Failed to decode {path}"))
  }

  /// Check whether a file exists on a branch.
  ///
  /// A 404 is treated as absence rather than an error.
  #[instrument(skip(self), level = "debug")]
  pub async fn file_exists(&self, owner: &str, repo: &str, path: &str, reference: Option<&str>) -> Result<bool> {
    let sha = self.find_file_sha(owner, repo, path, reference).await?;
    Ok(sha.is_some())
  }

  /// Create a new file on a branch
  #[instrument(skip(self, content), level = "debug")]
  pub async fn create_file(
    &self,
    owner: &str,
    repo: &str,
    path: &str,
    content: &str,
    message: &str,
    branch: Option<&str>,
  ) -> Result<FileWriteResult> {
    let body = FileWriteRequest {
      message: message.to_string(),
      content: encode_content(content),
      sha: None,
      branch: branch.map(str::to_string),
    };

    let response = self
      .request(Method::PUT, &format!("/repos/{owner}/{repo}/contents/{path}"))
      .json(&body)
      .send()
      .await
      .context("Failed to create file")?;

    parse_json(response, &format!("File {path}")).await
  }

  /// Update a file on a branch, creating it when it does not exist yet.
  ///
  /// The contents API requires the current blob sha for updates, so the file
  /// is looked up first; an absent file falls back to [`Self::create_file`].
  #[instrument(skip(self, content), level = "debug")]
  pub async fn update_file(
    &self,
    owner: &str,
    repo: &str,
    path: &str,
    content: &str,
    message: &str,
    branch: Option<&str>,
  ) -> Result<FileWriteResult> {
    let Some(sha) = self.find_file_sha(owner, repo, path, branch).await? else {
      debug!(path, "file absent, falling back to create");
      return self.create_file(owner, repo, path, content, message, branch).await;
    };

    let body = FileWriteRequest {
      message: message.to_string(),
      content: encode_content(content),
      sha: Some(sha),
      branch: branch.map(str::to_string),
    };

    let response = self
      .request(Method::PUT, &format!("/repos/{owner}/{repo}/contents/{path}"))
      .json(&body)
      .send()
      .await
      .context("Failed to update file")?;

    parse_json(response, &format!("File {path}")).await
  }

  /// Delete a file from a branch
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_file(
    &self,
    owner: &str,
    repo: &str,
    path: &str,
    message: &str,
    branch: Option<&str>,
  ) -> Result<FileWriteResult> {
    let sha = self
      .find_file_sha(owner, repo, path, branch)
      .await?
      .ok_or_else(|| anyhow::anyhow!("File {path} not found"))?;

    let body = FileDeleteRequest {
      message: message.to_string(),
      sha,
      branch: branch.map(str::to_string),
    };

    let response = self
      .request(Method::DELETE, &format!("/repos/{owner}/{repo}/contents/{path}"))
      .json(&body)
      .send()
      .await
      .context("Failed to delete file")?;

    parse_json(response, &format!("File {path}")).await
  }

  /// Upload a list of files, one at a time.
  ///
  /// Each file is created first; if the service rejects the create (the path
  /// already has a blob), the upload falls back to an update. The first
  /// failure that survives the fallback aborts the remaining files.
  #[instrument(skip(self, files), fields(count = files.len()), level = "debug")]
  pub async fn upload_files(
    &self,
    owner: &str,
    repo: &str,
    files: &[RepositoryFile],
    message: &str,
    branch: Option<&str>,
  ) -> Result<Vec<FileWriteResult>> {
    let mut results = Vec::with_capacity(files.len());

    for file in files {
      debug!(path = %file.path, "uploading file");

      let result = match self
        .create_file(owner, repo, &file.path, &file.content, message, branch)
        .await
      {
        Ok(result) => result,
        Err(create_error) => {
          debug!(path = %file.path, error = %create_error, "create rejected, falling back to update");
          self
            .update_file(owner, repo, &file.path, &file.content, message, branch)
            .await
            .with_context(|| format!("Failed to upload {}", file.path))?
        }
      };

      results.push(result);
    }

    Ok(results)
  }

  /// Look up the current blob sha of a file, mapping a 404 onto `None`
  pub(crate) async fn find_file_sha(
    &self,
    owner: &str,
    repo: &str,
    path: &str,
    reference: Option<&str>,
  ) -> Result<Option<String>> {
    let request = self.request(Method::GET, &format!("/repos/{owner}/{repo}/contents/{path}"));
    let response = with_ref(request, reference)
      .send()
      .await
      .context("Failed to fetch file")?;

    if response.status() == StatusCode::NOT_FOUND {
      return Ok(None);
    }

    let content: GitHubContent = parse_json(response, &format!("File {path}")).await?;
    Ok(Some(content.sha))
  }
}
