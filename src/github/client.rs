//! GitHub API client wrapper using octocrab

use async_trait::async_trait;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};

use crate::error::Result;
use crate::github::git::GitOps;

/// Owner/name pair identifying a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// GitHub API client wrapper
pub struct GitHubClient {
    /// The octocrab instance
    inner: Octocrab,
}

impl GitHubClient {
    /// Create a new client authenticated with the given token
    pub fn new(token: &SecretString) -> Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token.expose_secret().to_string())
            .build()?;

        Ok(Self { inner: octocrab })
    }

    /// Get the inner octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.inner
    }
}

/// Capability to obtain an authenticated client for a bearer token
///
/// Every call returns a fresh, independent client. Nothing ambient is
/// swapped or restored, so two events processed concurrently can never
/// observe each other's credentials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientFactory: Send + Sync {
    /// Build a client scoped to the given token
    async fn authenticated(&self, token: SecretString) -> Result<Box<dyn GitOps>>;
}

/// [`ClientFactory`] backed by a fresh octocrab instance per token
pub struct OctocrabFactory;

#[async_trait]
impl ClientFactory for OctocrabFactory {
    async fn authenticated(&self, token: SecretString) -> Result<Box<dyn GitOps>> {
        Ok(Box::new(GitHubClient::new(&token)?))
    }
}
