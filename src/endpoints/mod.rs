//! # GitHub API Endpoints
//!
//! Organized endpoint implementations for different GitHub API resource types,
//! including users, repositories, branches, file contents, and commits.

pub mod branches;
pub mod commits;
pub mod contents;
pub mod repos;
pub mod users;
