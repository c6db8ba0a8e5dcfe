//! # GitHub API Client
//!
//! Provides GitHub REST API integration for repositories, branches, file
//! contents, and commits, supporting token authentication and the common
//! operations needed to read and write repository content.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod models;
pub mod utils;

// Re-export the client
pub use client::{GitHubClient, create_github_client};
// Re-export models
pub use models::{
  CommitDetail, CommitSignature, FileWriteResult, GitHubBranch, GitHubCommit, GitHubCommitRef, GitHubContent,
  GitHubRef, GitHubRefObject, GitHubRepository, GitHubUser,
};
// Re-export endpoints structs
pub use endpoints::contents::RepositoryFile;
pub use endpoints::repos::CreateRepositoryParams;
