//! Project-board card creation

use async_trait::async_trait;

use crate::error::{BotError, Result};
use crate::github::client::GitHubClient;

/// Content type string for issue-backed cards
pub const CONTENT_TYPE_ISSUE: &str = "Issue";

/// Project-board writes the issue assigner needs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectOps: Send + Sync {
    /// Create a card in the given column linking the given content
    async fn create_card(&self, column_id: u64, content_id: u64, content_type: &str)
        -> Result<()>;
}

#[async_trait]
impl ProjectOps for GitHubClient {
    async fn create_card(
        &self,
        column_id: u64,
        content_id: u64,
        content_type: &str,
    ) -> Result<()> {
        // GitHub API: POST /projects/columns/{column_id}/cards
        let route = format!("/projects/columns/{}/cards", column_id);
        let body = serde_json::json!({
            "content_id": content_id,
            "content_type": content_type,
        });

        let _: serde_json::Value = self
            .octocrab()
            .post(&route, Some(&body))
            .await
            .map_err(|e| BotError::CardCreation {
                column: column_id,
                issue: content_id,
                message: format!("{:?}", e),
            })?;

        Ok(())
    }
}
