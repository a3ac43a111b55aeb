//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// orgbot - GitHub project-board and CI-touch automation bot
#[derive(Parser)]
#[command(name = "orgbot", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a secret under the bot's public key (for repository configs)
    Encrypt(EncryptArgs),

    /// Decrypt a base64 ciphertext with the bot's private key
    Decrypt(DecryptArgs),

    /// Process one webhook delivery from a payload file
    Deliver(DeliverArgs),
}

#[derive(Args)]
pub struct EncryptArgs {
    /// Path to the RSA public key (PEM)
    #[arg(long, env = "ORGBOT_PUBLIC_KEY")]
    pub public_key: PathBuf,

    /// Secret to encrypt; read from stdin when omitted so tokens stay out
    /// of shell history
    pub plaintext: Option<String>,
}

#[derive(Args)]
pub struct DecryptArgs {
    /// Path to the RSA private key (PEM)
    #[arg(long, env = "ORGBOT_PRIVATE_KEY")]
    pub private_key: PathBuf,

    /// Base64 ciphertext to decrypt; read from stdin when omitted
    pub ciphertext: Option<String>,
}

#[derive(Args)]
pub struct DeliverArgs {
    /// Webhook event type, e.g. `push` or `issues`
    #[arg(long)]
    pub event: String,

    /// Path to the JSON payload file
    #[arg(long)]
    pub payload: PathBuf,

    /// Path to the RSA private key (PEM) for config token decryption
    #[arg(long, env = "ORGBOT_PRIVATE_KEY")]
    pub private_key: PathBuf,

    /// GitHub token for the bot's own API calls (config fetch, cards)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,
}
