//! Deliver CLI command handler
//!
//! The hook point for whatever delivery layer invokes the process: takes an
//! already-verified webhook payload from disk and runs it through the
//! dispatcher.

use secrecy::SecretString;
use tracing::info;

use crate::cli::commands::DeliverArgs;
use crate::crypto;
use crate::error::Result;
use crate::github::{GitHubClient, OctocrabFactory};
use crate::handlers::{Dispatcher, WebhookEvent};

/// Handle `orgbot deliver`
pub async fn handle_deliver(args: DeliverArgs) -> Result<()> {
    let private_key = crypto::private_key_from_pem_file(&args.private_key)?;
    let body = std::fs::read_to_string(&args.payload)?;

    let Some(event) = WebhookEvent::parse(&args.event, &body)? else {
        info!(event = %args.event, "event type not handled, ignoring");
        return Ok(());
    };

    let token = SecretString::from(args.token);
    let client = GitHubClient::new(&token)?;
    let dispatcher = Dispatcher::new(private_key, client, Box::new(OctocrabFactory));

    dispatcher.dispatch(event).await;
    Ok(())
}
