//! Issue event handling
//!
//! Newly opened issues are filed as cards into every configured
//! project-board column, in the order the config lists them. Columns are
//! attempted independently: one failing card never suppresses the rest,
//! and all failures are reported together.

use tracing::{debug, info, warn};

use crate::config::RepositoryConfig;
use crate::error::BotError;
use crate::events::{IssueAction, IssueEvent};
use crate::github::projects::{ProjectOps, CONTENT_TYPE_ISSUE};

/// What happened for one issue event
#[derive(Debug, Default)]
pub struct AssignmentSummary {
    /// Columns a card was created in, in attempt order
    pub created: Vec<u64>,
    /// Columns whose card creation failed, with the error
    pub failed: Vec<(u64, BotError)>,
}

impl AssignmentSummary {
    /// True when nothing was attempted or everything succeeded
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Assign a newly opened issue to the configured project columns
///
/// No-ops (with a logged reason) when the action is not `opened` or the
/// repository has no non-empty `columns` list configured.
pub async fn assign_columns(
    event: &IssueEvent,
    config: Option<&RepositoryConfig>,
    projects: &dyn ProjectOps,
) -> AssignmentSummary {
    let repo_url = event.repository.url();
    debug!(repo = %repo_url, issue = event.issue.id, action = ?event.action, "issues event received");

    if event.action != IssueAction::Opened {
        return AssignmentSummary::default();
    }

    let columns = match config.and_then(|cfg| cfg.columns()) {
        Some(columns) => columns,
        None => {
            info!(repo = %repo_url, "no 'columns' configured, ignoring opened issue");
            return AssignmentSummary::default();
        }
    };

    let mut summary = AssignmentSummary::default();
    for &column in columns {
        debug!(issue = event.issue.id, column, "adding issue to column");
        match projects
            .create_card(column, event.issue.id, CONTENT_TYPE_ISSUE)
            .await
        {
            Ok(()) => summary.created.push(column),
            Err(e) => {
                warn!(repo = %repo_url, issue = event.issue.id, column, "card creation failed: {}", e);
                summary.failed.push((column, e));
            }
        }
    }

    info!(
        repo = %repo_url,
        issue = event.issue.id,
        created = summary.created.len(),
        failed = summary.failed.len(),
        "issue assignment finished"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    use crate::events::{Issue, RepoOwner, Repository};
    use crate::github::projects::MockProjectOps;

    fn issue_event(action: IssueAction) -> IssueEvent {
        IssueEvent {
            action,
            issue: Issue {
                id: 12345,
                html_url: Some("https://github.com/acme/example/issues/1".into()),
            },
            repository: Repository {
                name: "example".into(),
                owner: RepoOwner {
                    name: None,
                    login: Some("acme".into()),
                },
                html_url: Some("https://github.com/acme/example".into()),
            },
        }
    }

    fn columns_config(columns: &str) -> RepositoryConfig {
        RepositoryConfig::parse(&format!("columns: {}", columns))
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn test_creates_one_card_per_column_in_order() {
        let event = issue_event(IssueAction::Opened);
        let cfg = columns_config("[42, 99]");

        let mut projects = MockProjectOps::new();
        let mut seq = Sequence::new();
        for column in [42u64, 99] {
            projects
                .expect_create_card()
                .withf(move |c, issue, content_type| {
                    *c == column && *issue == 12345 && *content_type == *CONTENT_TYPE_ISSUE
                })
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _, _| Ok(()));
        }

        let summary = assign_columns(&event, Some(&cfg), &projects).await;
        assert_eq!(summary.created, vec![42, 99]);
        assert!(summary.is_clean());
    }

    #[tokio::test]
    async fn test_noop_when_action_is_not_opened() {
        let event = issue_event(IssueAction::Other);
        let cfg = columns_config("[42]");

        // No expectations: any card creation would panic
        let projects = MockProjectOps::new();
        let summary = assign_columns(&event, Some(&cfg), &projects).await;
        assert!(summary.created.is_empty());
    }

    #[tokio::test]
    async fn test_noop_without_config_or_columns() {
        let event = issue_event(IssueAction::Opened);
        let projects = MockProjectOps::new();

        let summary = assign_columns(&event, None, &projects).await;
        assert!(summary.created.is_empty());

        let empty = columns_config("[]");
        let summary = assign_columns(&event, Some(&empty), &projects).await;
        assert!(summary.created.is_empty());
    }

    #[tokio::test]
    async fn test_one_failing_column_does_not_abort_the_rest() {
        let event = issue_event(IssueAction::Opened);
        let cfg = columns_config("[42, 99, 7]");

        let mut projects = MockProjectOps::new();
        projects
            .expect_create_card()
            .times(3)
            .returning(|column, issue, _| {
                if column == 99 {
                    Err(BotError::CardCreation {
                        column,
                        issue,
                        message: "boom".into(),
                    })
                } else {
                    Ok(())
                }
            });

        let summary = assign_columns(&event, Some(&cfg), &projects).await;
        assert_eq!(summary.created, vec![42, 7]);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, 99);
    }
}
