//! Custom error types for orgbot
//!
//! Every failure is scoped to the single webhook event being processed:
//! handlers log these with enough repository/ref/issue context to diagnose
//! and then stop. Nothing here is fatal to the process and nothing is
//! retried; redelivery is the event source's responsibility.

use thiserror::Error;

/// Main error type for the orgbot application
#[derive(Error, Debug)]
pub enum BotError {
    /// RSA key material could not be parsed
    #[error("Cannot parse RSA key: {0}")]
    InvalidKey(String),

    /// Ciphertext is malformed, truncated, or was produced for another key pair
    #[error("Cannot decrypt configured token: {0}")]
    Decryption(String),

    /// RSA encryption failed for a reason other than payload size
    #[error("Cannot encrypt secret: {0}")]
    Encryption(String),

    /// Plaintext exceeds the key's maximum payload size
    #[error("Plaintext too large for the RSA key's payload limit")]
    PayloadTooLarge,

    /// The git create-commit call failed; no ref update is attempted
    #[error("Failed to create commit in {repo}: {message}")]
    CommitCreation { repo: String, message: String },

    /// The branch ref update failed; the orphan commit is left unreferenced
    #[error("Failed to update ref {git_ref} in {repo}: {message}")]
    RefUpdate {
        repo: String,
        git_ref: String,
        message: String,
    },

    /// A project-card creation call failed for one column
    #[error("Failed to add issue {issue} to column {column}: {message}")]
    CardCreation {
        column: u64,
        issue: u64,
        message: String,
    },

    /// The repository config file could not be fetched
    #[error("Failed to fetch repository config from {repo}: {message}")]
    ConfigFetch { repo: String, message: String },

    /// The repository config file is not valid YAML
    #[error("Invalid repository config: {0}")]
    ConfigParse(String),

    /// A webhook payload is missing a field the handlers rely on
    #[error("Malformed webhook payload: {0}")]
    InvalidPayload(String),

    /// Generic GitHub API error
    #[error("GitHub API request failed: {0}")]
    GitHubApi(String),

    /// JSON serialization/deserialization error
    #[error("Failed to parse payload: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<octocrab::Error> for BotError {
    fn from(err: octocrab::Error) -> Self {
        // Use Debug format; octocrab's Display only returns "GitHub"
        BotError::GitHubApi(format!("{:?}", err))
    }
}

/// Result type alias using BotError
pub type Result<T> = std::result::Result<T, BotError>;
