//! orgbot - GitHub automation bot CLI
//!
//! `encrypt`/`decrypt` manage the RSA-encrypted tokens embedded in
//! repository config files; `deliver` processes one webhook payload.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use orgbot::cli::commands::{Cli, Commands};
use orgbot::cli::{crypt, deliver};
use orgbot::error::Result;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt(args) => crypt::handle_encrypt(args),
        Commands::Decrypt(args) => crypt::handle_decrypt(args),
        Commands::Deliver(args) => deliver::handle_deliver(args).await,
    }
}
