use serde::Deserialize;

/// Represents a GitHub user profile
#[derive(Debug, Deserialize)]
pub struct GitHubUser {
  pub login: String,
  pub id: u64,
  pub name: Option<String>,
  pub email: Option<String>,
  pub avatar_url: Option<String>,
  pub html_url: Option<String>,
}

/// Represents a GitHub repository
#[derive(Debug, Deserialize)]
pub struct GitHubRepository {
  pub id: u64,
  pub name: String,
  pub full_name: String,
  pub owner: GitHubUser,
  pub private: bool,
  pub description: Option<String>,
  pub default_branch: Option<String>,
  pub html_url: String,
}

/// Represents a GitHub branch
#[derive(Debug, Deserialize)]
pub struct GitHubBranch {
  pub name: String,
  pub commit: GitHubCommitRef,
  #[serde(default)]
  pub protected: bool,
}

/// A lightweight commit pointer as embedded in branches and write responses
#[derive(Debug, Deserialize)]
pub struct GitHubCommitRef {
  pub sha: String,
  pub url: Option<String>,
  pub html_url: Option<String>,
}

/// Represents a git reference, as returned by the git/refs endpoints
#[derive(Debug, Deserialize)]
pub struct GitHubRef {
  #[serde(rename = "ref")]
  pub ref_name: String,
  pub object: GitHubRefObject,
}

/// The object a git reference points at
#[derive(Debug, Deserialize)]
pub struct GitHubRefObject {
  pub sha: String,
  #[serde(rename = "type")]
  pub object_type: Option<String>,
}

/// Represents a file (or directory entry) in a repository
#[derive(Debug, Deserialize)]
pub struct GitHubContent {
  pub name: String,
  pub path: String,
  pub sha: String,
  pub size: Option<u64>,
  #[serde(rename = "type")]
  pub content_type: Option<String>,
  pub content: Option<String>,
  pub encoding: Option<String>,
  pub html_url: Option<String>,
}

/// Represents a commit on a repository
#[derive(Debug, Deserialize)]
pub struct GitHubCommit {
  pub sha: String,
  pub commit: CommitDetail,
  pub html_url: Option<String>,
  pub author: Option<GitHubUser>,
}

/// The git-level details of a commit
#[derive(Debug, Deserialize)]
pub struct CommitDetail {
  pub message: String,
  pub author: Option<CommitSignature>,
  pub committer: Option<CommitSignature>,
}

/// An author or committer signature on a commit
#[derive(Debug, Deserialize)]
pub struct CommitSignature {
  pub name: String,
  pub email: Option<String>,
  pub date: Option<String>,
}

/// The result of a contents write (create, update, or delete)
#[derive(Debug, Deserialize)]
pub struct FileWriteResult {
  pub content: Option<GitHubContent>,
  pub commit: GitHubCommitRef,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_github_user_deserialization() {
    let json = json!({
        "login": "octocat",
        "id": 1,
        "name": "The Octocat"
    });

    let user: GitHubUser = serde_json::from_value(json).unwrap();

    assert_eq!(user.login, "octocat");
    assert_eq!(user.id, 1);
    assert_eq!(user.name, Some("The Octocat".to_string()));
    assert_eq!(user.email, None);
  }

  #[test]
  fn test_github_repository_deserialization() {
    let json = json!({
        "id": 1296269,
        "name": "Hello-World",
        "full_name": "octocat/Hello-World",
        "owner": {
            "login": "octocat",
            "id": 1
        },
        "private": false,
        "description": "This your first repo!",
        "default_branch": "main",
        "html_url": "https://github.com/octocat/Hello-World"
    });

    let repo: GitHubRepository = serde_json::from_value(json).unwrap();

    assert_eq!(repo.id, 1296269);
    assert_eq!(repo.full_name, "octocat/Hello-World");
    assert_eq!(repo.owner.login, "octocat");
    assert!(!repo.private);
    assert_eq!(repo.default_branch, Some("main".to_string()));
  }

  #[test]
  fn test_github_branch_deserialization() {
    let json = json!({
        "name": "main",
        "commit": {
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "url": "https://api.github.com/repos/octocat/Hello-World/commits/6dcb09b"
        },
        "protected": true
    });

    let branch: GitHubBranch = serde_json::from_value(json).unwrap();

    assert_eq!(branch.name, "main");
    assert_eq!(branch.commit.sha, "6dcb09b5b57875f334f61aebed695e2e4193db5e");
    assert!(branch.protected);
  }

  #[test]
  fn test_github_branch_protected_defaults_to_false() {
    let json = json!({
        "name": "feature",
        "commit": { "sha": "abc123" }
    });

    let branch: GitHubBranch = serde_json::from_value(json).unwrap();

    assert!(!branch.protected);
  }

  #[test]
  fn test_github_content_deserialization() {
    let json = json!({
        "name": "README.md",
        "path": "docs/README.md",
        "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
        "size": 5362,
        "type": "file",
        "content": "SGVsbG8sIHdvcmxkIQ==\n",
        "encoding": "base64",
        "html_url": "https://github.com/octocat/Hello-World/blob/main/docs/README.md"
    });

    let content: GitHubContent = serde_json::from_value(json).unwrap();

    assert_eq!(content.name, "README.md");
    assert_eq!(content.path, "docs/README.md");
    assert_eq!(content.content_type, Some("file".to_string()));
    assert_eq!(content.encoding, Some("base64".to_string()));
    assert!(content.content.is_some());
  }

  #[test]
  fn test_github_commit_deserialization() {
    let json = json!({
        "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "commit": {
            "message": "Fix all the bugs",
            "author": {
                "name": "Monalisa Octocat",
                "email": "mona@github.com",
                "date": "2011-04-14T16:00:49Z"
            }
        },
        "html_url": "https://github.com/octocat/Hello-World/commit/6dcb09b",
        "author": {
            "login": "octocat",
            "id": 1
        }
    });

    let commit: GitHubCommit = serde_json::from_value(json).unwrap();

    assert_eq!(commit.sha, "6dcb09b5b57875f334f61aebed695e2e4193db5e");
    assert_eq!(commit.commit.message, "Fix all the bugs");
    assert_eq!(commit.commit.author.as_ref().unwrap().name, "Monalisa Octocat");
    assert_eq!(commit.author.unwrap().login, "octocat");
  }

  #[test]
  fn test_file_write_result_deserialization() {
    let json = json!({
        "content": {
            "name": "notes.txt",
            "path": "notes.txt",
            "sha": "95b966ae1c166bd92f8ae7d1c313e738c731dfc3",
            "size": 9,
            "type": "file"
        },
        "commit": {
            "sha": "7638417db6d59f3c431d3e1f261cc637155684cd",
            "html_url": "https://github.com/octocat/Hello-World/commit/7638417"
        }
    });

    let result: FileWriteResult = serde_json::from_value(json).unwrap();

    assert_eq!(result.content.unwrap().path, "notes.txt");
    assert_eq!(result.commit.sha, "7638417db6d59f3c431d3e1f261cc637155684cd");
  }

  #[test]
  fn test_file_write_result_without_content() {
    // Deletes come back with a null content field
    let json = json!({
        "content": null,
        "commit": { "sha": "7638417db6d59f3c431d3e1f261cc637155684cd" }
    });

    let result: FileWriteResult = serde_json::from_value(json).unwrap();

    assert!(result.content.is_none());
  }

  #[test]
  fn test_github_ref_deserialization() {
    let json = json!({
        "ref": "refs/heads/feature",
        "object": {
            "sha": "aa218f56b14c9653891f9e74264a383fa43fefbd",
            "type": "commit"
        }
    });

    let git_ref: GitHubRef = serde_json::from_value(json).unwrap();

    assert_eq!(git_ref.ref_name, "refs/heads/feature");
    assert_eq!(git_ref.object.sha, "aa218f56b14c9653891f9e74264a383fa43fefbd");
    assert_eq!(git_ref.object.object_type, Some("commit".to_string()));
  }
}
