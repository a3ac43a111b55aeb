//! Git data operations (commits and refs)

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{BotError, Result};
use crate::github::client::{GitHubClient, RepoId};

/// Response of a create-commit call
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedCommit {
    /// SHA of the newly created commit object
    pub sha: String,
}

/// Response of an update-ref call
#[derive(Debug, Clone)]
pub struct UpdatedRef {
    /// API URL of the object the ref now points at
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct RefResponse {
    object: RefObject,
}

#[derive(Debug, Deserialize)]
struct RefObject {
    url: String,
}

/// Low-level git writes the touch automation needs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitOps: Send + Sync {
    /// Create a commit object from an existing tree
    async fn create_commit(
        &self,
        repo: &RepoId,
        message: &str,
        tree: &str,
        parents: Vec<String>,
    ) -> Result<CreatedCommit>;

    /// Point `heads/<branch>` at the given commit, non-force
    async fn update_ref(&self, repo: &RepoId, branch: &str, sha: &str) -> Result<UpdatedRef>;
}

#[async_trait]
impl GitOps for GitHubClient {
    async fn create_commit(
        &self,
        repo: &RepoId,
        message: &str,
        tree: &str,
        parents: Vec<String>,
    ) -> Result<CreatedCommit> {
        // GitHub API: POST /repos/{owner}/{repo}/git/commits
        let route = format!("/repos/{}/{}/git/commits", repo.owner, repo.name);
        let body = serde_json::json!({
            "message": message,
            "tree": tree,
            "parents": parents,
        });

        self.octocrab()
            .post(&route, Some(&body))
            .await
            .map_err(|e| BotError::CommitCreation {
                repo: repo.to_string(),
                message: format!("{:?}", e),
            })
    }

    async fn update_ref(&self, repo: &RepoId, branch: &str, sha: &str) -> Result<UpdatedRef> {
        // GitHub API: PATCH /repos/{owner}/{repo}/git/refs/heads/{branch}
        let route = format!(
            "/repos/{}/{}/git/refs/heads/{}",
            repo.owner, repo.name, branch
        );
        let body = serde_json::json!({
            "sha": sha,
            "force": false,
        });

        let response: RefResponse = self
            .octocrab()
            .patch(&route, Some(&body))
            .await
            .map_err(|e| BotError::RefUpdate {
                repo: repo.to_string(),
                git_ref: format!("heads/{}", branch),
                message: format!("{:?}", e),
            })?;

        Ok(UpdatedRef {
            url: response.object.url,
        })
    }
}
