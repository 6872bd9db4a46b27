use std::sync::Arc;

use agency_email_contracts::{Email, EmailService};
use agency_extern_impl::http::HttpClient;
use agency_models::email_address::EmailAddressWithName;
use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::warn;
use url::Url;

pub mod template;

/// Sends emails through the HTTP API of the email provider.
#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    config: Arc<EmailServiceConfig>,
    client: HttpClient,
}

#[derive(Debug)]
pub struct EmailServiceConfig {
    /// Base url of the email api, must end with a `/`.
    pub api_url: Url,
    pub api_key: SecretString,
    pub from: EmailAddressWithName,
}

impl EmailServiceImpl {
    pub fn new(config: EmailServiceConfig, client: HttpClient) -> Self {
        Self {
            config: config.into(),
            client,
        }
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let endpoint = self
            .config
            .api_url
            .join("emails")
            .context("Failed to build email api endpoint")?;

        let from = self.config.from.to_string();
        let to = [email.recipient.to_string()];
        let reply_to = email.reply_to.as_ref().map(ToString::to_string);

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&SendEmailRequest {
                from: &from,
                to: &to,
                reply_to: reply_to.as_deref(),
                subject: &email.subject,
                text: &email.body,
            })
            .send()
            .await
            .context("Failed to reach the email api")?;

        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_client_error() {
            warn!(%status, %body, "The email api refused the message");
            return Ok(false);
        }

        anyhow::bail!("Email api responded with {status}: {body}")
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    text: &'a str,
}
