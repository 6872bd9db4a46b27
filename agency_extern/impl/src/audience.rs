use std::sync::Arc;

use agency_extern_contracts::audience::{
    AudienceApiService, AudienceContact, AudienceCreateContactError,
};
use anyhow::{anyhow, Context};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

/// Manages contacts of a marketing audience through the email provider's
/// API.
#[derive(Debug, Clone)]
pub struct AudienceApiServiceImpl {
    config: Arc<AudienceApiServiceConfig>,
    client: HttpClient,
}

#[derive(Debug)]
pub struct AudienceApiServiceConfig {
    /// Base url of the email provider api, must end with a `/`.
    pub api_url: Url,
    pub api_key: SecretString,
    pub audience_id: String,
}

impl AudienceApiServiceImpl {
    pub fn new(config: AudienceApiServiceConfig, client: HttpClient) -> Self {
        Self {
            config: config.into(),
            client,
        }
    }

    fn contacts_endpoint(&self) -> anyhow::Result<Url> {
        let mut url = self.config.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("Invalid audience api url"))?
            .pop_if_empty()
            .extend(["audiences", &self.config.audience_id, "contacts"]);
        Ok(url)
    }
}

impl AudienceApiService for AudienceApiServiceImpl {
    async fn create_contact(
        &self,
        contact: AudienceContact,
    ) -> Result<(), AudienceCreateContactError> {
        let response = self
            .client
            .post(self.contacts_endpoint()?)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&CreateContactRequest {
                email: contact.email.as_str(),
                first_name: contact.first_name.as_deref(),
                last_name: contact.last_name.as_deref(),
                unsubscribed: contact.unsubscribed,
            })
            .send()
            .await
            .context("Failed to reach the audience api")?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .context("Failed to read audience api response")?;

        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(ErrorResponse { message }) => Err(AudienceCreateContactError::Rejected(message)),
            Err(_) => Err(anyhow!("Audience api responded with {status}: {body}").into()),
        }
    }
}

#[derive(Serialize)]
struct CreateContactRequest<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<&'a str>,
    unsubscribed: bool,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}
