//! GitHub API integration module
//!
//! This module provides the bot's outbound GitHub surface:
//! - octocrab client wrapper and per-token client factory
//! - git data operations (create commit, update ref)
//! - project-board card creation
//! - per-repository config fetch via the contents API

pub mod client;
pub mod config_source;
pub mod git;
pub mod projects;

pub use client::{ClientFactory, GitHubClient, OctocrabFactory, RepoId};
pub use config_source::ConfigSource;
pub use git::{CreatedCommit, GitOps, UpdatedRef};
pub use projects::ProjectOps;
