//! Per-repository config fetch via the contents API

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

use crate::config::{RepositoryConfig, CONFIG_PATH};
use crate::error::{BotError, Result};
use crate::github::client::{GitHubClient, RepoId};

/// Where a repository's bot configuration comes from
///
/// Loaded fresh for every event; there is no caching layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Fetch and parse `.github/org-project-bot.yaml` for the repository
    ///
    /// A missing file is `Ok(None)`, not an error.
    async fn load_config(&self, repo: &RepoId) -> Result<Option<RepositoryConfig>>;
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    /// File body, base64 with embedded newlines
    content: String,
}

#[async_trait]
impl ConfigSource for GitHubClient {
    async fn load_config(&self, repo: &RepoId) -> Result<Option<RepositoryConfig>> {
        // GitHub API: GET /repos/{owner}/{repo}/contents/{path}
        let route = format!("/repos/{}/{}/contents/{}", repo.owner, repo.name, CONFIG_PATH);

        let response: ContentsResponse =
            match self.octocrab().get(&route, None::<&()>).await {
                Ok(response) => response,
                Err(octocrab::Error::GitHub { source, .. })
                    if source.status_code.as_u16() == 404 =>
                {
                    return Ok(None);
                }
                Err(e) => {
                    return Err(BotError::ConfigFetch {
                        repo: repo.to_string(),
                        message: format!("{:?}", e),
                    });
                }
            };

        let compact: String = response.content.split_whitespace().collect();
        let raw = BASE64.decode(compact.as_bytes()).map_err(|e| BotError::ConfigFetch {
            repo: repo.to_string(),
            message: format!("invalid base64 content: {}", e),
        })?;
        let document = String::from_utf8(raw).map_err(|e| BotError::ConfigFetch {
            repo: repo.to_string(),
            message: format!("config is not UTF-8: {}", e),
        })?;

        RepositoryConfig::parse(&document)
    }
}
