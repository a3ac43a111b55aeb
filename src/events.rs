//! Typed webhook event payloads
//!
//! Deserialized straight from the GitHub wire format. Only the fields the
//! handlers actually read are modelled; serde drops the rest.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{BotError, Result};
use crate::github::RepoId;

/// A `push` webhook payload
#[derive(Debug, Clone, Deserialize)]
pub struct PushEvent {
    /// Full git ref that was pushed, e.g. `refs/heads/feature-1`
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub repository: Repository,
    /// Commits contained in the push, in order
    #[serde(default)]
    pub commits: Vec<PushCommit>,
    pub head_commit: Option<HeadCommit>,
}

impl PushEvent {
    /// The pushed branch name with any `refs/heads/` prefix stripped
    pub fn branch(&self) -> &str {
        self.git_ref
            .strip_prefix("refs/heads/")
            .unwrap_or(&self.git_ref)
    }

    /// The head commit, required for the touch automation
    pub fn head_commit(&self) -> Result<&HeadCommit> {
        self.head_commit
            .as_ref()
            .ok_or_else(|| BotError::InvalidPayload("push event has no head_commit".into()))
    }
}

/// One commit within a push payload
#[derive(Debug, Clone, Deserialize)]
pub struct PushCommit {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub author: CommitAuthor,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Commit author as reported in a push payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitAuthor {
    #[serde(default)]
    pub username: Option<String>,
}

/// The head commit of a push, with its tree
#[derive(Debug, Clone, Deserialize)]
pub struct HeadCommit {
    pub id: String,
    pub tree_id: String,
}

/// An `issues` webhook payload
#[derive(Debug, Clone, Deserialize)]
pub struct IssueEvent {
    pub action: IssueAction,
    pub issue: Issue,
    pub repository: Repository,
}

/// Issue lifecycle action; only `opened` is acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueAction {
    Opened,
    #[serde(other)]
    Other,
}

/// The issue a lifecycle event refers to
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub id: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Repository descriptor shared by all payloads
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub owner: RepoOwner,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Repository owner; push payloads use `name`, others use `login`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoOwner {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
}

impl Repository {
    /// Owner/name pair for API calls
    pub fn id(&self) -> Result<RepoId> {
        let owner = self
            .owner
            .name
            .as_deref()
            .or(self.owner.login.as_deref())
            .ok_or_else(|| BotError::InvalidPayload("repository has no owner".into()))?;
        Ok(RepoId::new(owner, &self.name))
    }

    /// Repository URL for log context, falling back to owner/name
    pub fn url(&self) -> String {
        match (&self.html_url, self.id()) {
            (Some(url), _) => url.clone(),
            (None, Ok(id)) => id.to_string(),
            (None, Err(_)) => self.name.clone(),
        }
    }
}
