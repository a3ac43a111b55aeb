//! Command-line interface module
//!
//! The binary has two jobs: the operator workflow for encrypting tokens
//! that go into repository config files, and a `deliver` entry point that
//! feeds one webhook payload through the dispatcher.

pub mod commands;
pub mod crypt;
pub mod deliver;
