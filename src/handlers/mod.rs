//! Webhook event handlers and dispatch
//!
//! Events arrive as an event-type string plus a JSON body (already verified
//! by whatever delivery layer invokes us), get parsed into a typed payload
//! and are routed synchronously to the matching handler. Handler failures
//! are logged with repository context and end the event; nothing propagates
//! to the caller and nothing is retried.

pub mod issues;
pub mod push;

use rsa::RsaPrivateKey;
use tracing::{error, info};

use crate::error::Result;
use crate::events::{IssueEvent, PushEvent, Repository};
use crate::github::{ClientFactory, ConfigSource, ProjectOps, RepoId};

pub use issues::{assign_columns, AssignmentSummary};
pub use push::{evaluate, PolicyDecision, PushOutcome, PushWorkflow, SkipReason};

/// A parsed webhook event the bot knows how to handle
#[derive(Debug, Clone)]
pub enum WebhookEvent {
    Push(Box<PushEvent>),
    Issues(Box<IssueEvent>),
}

impl WebhookEvent {
    /// Parse an event-type string and JSON body into a typed event
    ///
    /// Event types the bot does not handle yield `Ok(None)`.
    pub fn parse(event_type: &str, body: &str) -> Result<Option<Self>> {
        match event_type {
            "push" => Ok(Some(Self::Push(Box::new(serde_json::from_str(body)?)))),
            "issues" => Ok(Some(Self::Issues(Box::new(serde_json::from_str(body)?)))),
            _ => Ok(None),
        }
    }
}

/// Routes typed events to their handlers
///
/// Holds the process-wide key material, the bot's own API client (config
/// fetch and card creation) and the factory that mints per-token clients
/// for the touch workflow.
pub struct Dispatcher<C> {
    private_key: RsaPrivateKey,
    client: C,
    factory: Box<dyn ClientFactory>,
}

impl<C> Dispatcher<C>
where
    C: ConfigSource + ProjectOps,
{
    pub fn new(private_key: RsaPrivateKey, client: C, factory: Box<dyn ClientFactory>) -> Self {
        Self {
            private_key,
            client,
            factory,
        }
    }

    /// Handle one event; failures are logged, never returned
    pub async fn dispatch(&self, event: WebhookEvent) {
        match event {
            WebhookEvent::Push(event) => self.on_push(&event).await,
            WebhookEvent::Issues(event) => self.on_issues(&event).await,
        }
    }

    async fn on_push(&self, event: &PushEvent) {
        let Some(repo) = resolve_repo(&event.repository) else {
            return;
        };
        let config = match self.client.load_config(&repo).await {
            Ok(config) => config,
            Err(e) => {
                error!(repo = %repo, "{}", e);
                return;
            }
        };

        let workflow = PushWorkflow::new(&self.private_key, self.factory.as_ref());
        match workflow.run(event, config.as_ref()).await {
            Ok(PushOutcome::Skipped(_)) => {}
            Ok(PushOutcome::Triggered { commit_sha, .. }) => {
                info!(repo = %repo, sha = %commit_sha, "touch commit pushed");
            }
            Err(e) => {
                error!(repo = %repo, branch = event.branch(), "push handling failed: {}", e);
            }
        }
    }

    async fn on_issues(&self, event: &IssueEvent) {
        let Some(repo) = resolve_repo(&event.repository) else {
            return;
        };
        let config = match self.client.load_config(&repo).await {
            Ok(config) => config,
            Err(e) => {
                error!(repo = %repo, "{}", e);
                return;
            }
        };

        let summary = assign_columns(event, config.as_ref(), &self.client).await;
        for (column, e) in &summary.failed {
            error!(repo = %repo, column, "{}", e);
        }
    }
}

/// Resolve the owner/name pair from a payload, logging malformed payloads
fn resolve_repo(repository: &Repository) -> Option<RepoId> {
    match repository.id() {
        Ok(repo) => Some(repo),
        Err(e) => {
            error!(repo = %repository.url(), "{}", e);
            None
        }
    }
}
