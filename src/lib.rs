//! orgbot - GitHub project-board and CI-touch automation bot
//!
//! This library implements the event-handling side of a small GitHub
//! automation bot: newly opened issues are filed into configured
//! project-board columns, and pushes by a configured bot user trigger an
//! empty "touch" commit to re-kick CI. Configuration secrets (the embedded
//! GitHub token) are stored RSA-encrypted in the per-repository config file.
//!
//! Webhook delivery and signature verification are the caller's problem;
//! this crate consumes already-verified typed payloads.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod events;
pub mod github;
pub mod handlers;

pub use error::{BotError, Result};
