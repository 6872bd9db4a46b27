use agency_config::Config;
use agency_email_contracts::{Email, EmailService};
use agency_models::email_address::EmailAddressWithName;
use anyhow::{ensure, Context};
use clap::Subcommand;

use crate::environment::Provider;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = Provider::new(&config)?
        .email()
        .context("Email api key is not configured")?;

    let ok = email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            reply_to: None,
        })
        .await?;

    ensure!(ok, "The email api refused the email");

    Ok(())
}
