//! Push event handling
//!
//! A push by the configured bot user to a feature branch gets answered with
//! an empty "touch" commit on the same branch, which re-triggers CI for the
//! post-deploy checks. The decision logic ([`evaluate`]) is a pure function;
//! [`PushWorkflow`] performs the side effects.
//!
//! Loop prevention is two-fold: the generated commit carries a skip marker in
//! its message, and only pushes containing a commit authored by the
//! configured user qualify in the first place.

use rsa::RsaPrivateKey;
use tracing::{debug, info};

use crate::config::{RepositoryConfig, TouchIncomplete};
use crate::crypto;
use crate::error::Result;
use crate::events::PushEvent;
use crate::github::ClientFactory;

/// Marker in a commit message that prevents the automation from re-triggering
pub const SKIP_MARKER: &str = "[skip action]";

/// Message of the generated touch commit
///
/// Must contain [`SKIP_MARKER`] so the push event caused by the generated
/// commit is itself skipped.
pub const TRIGGER_MESSAGE: &str = "chore(ci): trigger ci [skip action]";

/// Branches that are never auto-touched
const PROTECTED_BRANCHES: [&str; 2] = ["master", "main"];

/// Outcome of the trigger policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    /// Expected no-op; the reason is logged and the event ends here
    Skip(SkipReason),
    /// The push qualifies; proceed with the extracted plan
    Proceed(TriggerPlan),
}

/// Why a push event does not trigger the automation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Push went to `master` or `main`
    ProtectedBranch(String),
    /// The repository has no bot configuration
    ConfigMissing,
    /// `touch.user` is not configured
    MissingUser,
    /// `touch.github-token` is not configured
    MissingToken,
    /// A commit message carries the skip marker
    SkipMarker(String),
    /// No commit in the push was authored by the configured user
    NoCommitByUser(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProtectedBranch(branch) => {
                write!(f, "protected branch '{}' is never auto-touched", branch)
            }
            Self::ConfigMissing => write!(f, "no bot configuration in repository"),
            Self::MissingUser => write!(f, "no 'touch.user' configured"),
            Self::MissingToken => write!(f, "no 'touch.github-token' configured"),
            Self::SkipMarker(message) => {
                write!(f, "commit message carries the skip marker: {}", message)
            }
            Self::NoCommitByUser(user) => {
                write!(f, "no commit by configured user '{}'", user)
            }
        }
    }
}

/// Everything the workflow needs once a push qualifies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerPlan {
    /// Pushed branch, `refs/heads/` prefix stripped
    pub branch: String,
    /// Configured bot user whose commit qualified the push
    pub user: String,
    /// Encrypted token from the repository config, still base64 ciphertext
    pub encrypted_token: String,
}

/// Decide whether a push event should trigger a touch commit
///
/// Checks run in a fixed order and short-circuit on the first negative.
/// Skips are expected outcomes, never errors.
pub fn evaluate(event: &PushEvent, config: Option<&RepositoryConfig>) -> PolicyDecision {
    let branch = event.branch();
    if PROTECTED_BRANCHES.contains(&branch) {
        return PolicyDecision::Skip(SkipReason::ProtectedBranch(branch.to_string()));
    }

    let Some(config) = config else {
        return PolicyDecision::Skip(SkipReason::ConfigMissing);
    };
    let touch = match config.touch() {
        Ok(touch) => touch,
        Err(TouchIncomplete::MissingUser) => return PolicyDecision::Skip(SkipReason::MissingUser),
        Err(TouchIncomplete::MissingToken) => {
            return PolicyDecision::Skip(SkipReason::MissingToken)
        }
    };

    // Loop prevention: our own generated commits carry the marker
    if let Some(marked) = event
        .commits
        .iter()
        .find(|commit| commit.message.contains(SKIP_MARKER))
    {
        return PolicyDecision::Skip(SkipReason::SkipMarker(marked.message.clone()));
    }

    let by_user = event
        .commits
        .iter()
        .any(|commit| commit.author.username.as_deref() == Some(touch.user.as_str()));
    if !by_user {
        return PolicyDecision::Skip(SkipReason::NoCommitByUser(touch.user));
    }

    PolicyDecision::Proceed(TriggerPlan {
        branch: branch.to_string(),
        user: touch.user,
        encrypted_token: touch.github_token,
    })
}

/// Result of running the push workflow for one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// The policy said no; nothing was done
    Skipped(SkipReason),
    /// One commit was created and the branch ref now points at it
    Triggered {
        commit_sha: String,
        ref_url: String,
    },
}

/// Orchestrates one qualifying push event end to end
///
/// Policy → token decryption → authenticated client → create commit →
/// update ref. Every step is a terminal abort point for this event; there
/// are no retries and no compensation (a commit whose ref update fails is
/// left unreferenced).
pub struct PushWorkflow<'a> {
    private_key: &'a RsaPrivateKey,
    factory: &'a dyn ClientFactory,
}

impl<'a> PushWorkflow<'a> {
    /// Create a workflow bound to the process key material and a client factory
    pub fn new(private_key: &'a RsaPrivateKey, factory: &'a dyn ClientFactory) -> Self {
        Self {
            private_key,
            factory,
        }
    }

    /// Handle one push event
    pub async fn run(
        &self,
        event: &PushEvent,
        config: Option<&RepositoryConfig>,
    ) -> Result<PushOutcome> {
        let repo_url = event.repository.url();
        debug!(repo = %repo_url, branch = event.branch(), "push event received");

        let plan = match evaluate(event, config) {
            PolicyDecision::Skip(reason) => {
                info!(repo = %repo_url, branch = event.branch(), "skipping push: {}", reason);
                return Ok(PushOutcome::Skipped(reason));
            }
            PolicyDecision::Proceed(plan) => plan,
        };

        let token = crypto::decrypt(self.private_key, &plan.encrypted_token)?;
        let client = self.factory.authenticated(token).await?;

        let repo = event.repository.id()?;
        let head = event.head_commit()?;

        let commit = client
            .create_commit(&repo, TRIGGER_MESSAGE, &head.tree_id, vec![head.id.clone()])
            .await?;
        info!(repo = %repo, sha = %commit.sha, "created touch commit");

        let updated = client.update_ref(&repo, &plan.branch, &commit.sha).await?;
        info!(repo = %repo, url = %updated.url, "pushed ref heads/{}", plan.branch);

        Ok(PushOutcome::Triggered {
            commit_sha: commit.sha,
            ref_url: updated.url,
        })
    }
}
