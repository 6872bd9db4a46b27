use std::sync::Arc;

use agency_extern_contracts::leads::{Lead, LeadCreateError, LeadsApiService};
use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct LeadsApiServiceImpl {
    config: Arc<LeadsApiServiceConfig>,
    client: HttpClient,
}

#[derive(Debug)]
pub struct LeadsApiServiceConfig {
    pub endpoint: Url,
    pub token: SecretString,
}

impl LeadsApiServiceImpl {
    pub fn new(config: LeadsApiServiceConfig, client: HttpClient) -> Self {
        Self {
            config: config.into(),
            client,
        }
    }
}

impl LeadsApiService for LeadsApiServiceImpl {
    async fn create_lead(&self, lead: &Lead) -> Result<(), LeadCreateError> {
        let response = self
            .client
            .post(self.config.endpoint.clone())
            .bearer_auth(self.config.token.expose_secret())
            .json(&CreateLeadRequest {
                name: &lead.name,
                email: lead.email.as_str(),
                company: lead.company.as_deref(),
                website: lead.website.as_deref(),
                message: lead.message.as_deref(),
                source_detail: &lead.source_detail,
            })
            .send()
            .await
            .context("Failed to reach the leads api")?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(LeadCreateError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateLeadRequest<'a> {
    name: &'a str,
    email: &'a str,
    company: Option<&'a str>,
    website: Option<&'a str>,
    message: Option<&'a str>,
    source_detail: &'a str,
}
