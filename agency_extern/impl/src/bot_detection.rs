use std::sync::Arc;

use agency_extern_contracts::bot_detection::{BotDetectionApiService, BotVerdict, CheckLevel};
use agency_models::request::RequestContext;
use agency_utils::Apply;
use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct BotDetectionApiServiceImpl {
    config: Arc<BotDetectionApiServiceConfig>,
    client: HttpClient,
}

#[derive(Debug)]
pub struct BotDetectionApiServiceConfig {
    pub verify_endpoint: Url,
    pub secret: Option<SecretString>,
}

impl BotDetectionApiServiceImpl {
    pub fn new(config: BotDetectionApiServiceConfig, client: HttpClient) -> Self {
        Self {
            config: config.into(),
            client,
        }
    }
}

impl BotDetectionApiService for BotDetectionApiServiceImpl {
    async fn verify(
        &self,
        request: &RequestContext,
        level: CheckLevel,
    ) -> anyhow::Result<BotVerdict> {
        self.client
            .post(self.config.verify_endpoint.clone())
            .apply_map(self.config.secret.as_ref(), |builder, secret| {
                builder.bearer_auth(secret.expose_secret())
            })
            .json(&VerifyRequest {
                check_level: level.into(),
                client_ip: request.client_ip.to_string(),
                user_agent: request.user_agent.as_deref(),
                accept_language: request.accept_language.as_deref(),
                referer: request.referer.as_deref(),
            })
            .send()
            .await
            .context("Failed to reach the bot detection service")?
            .error_for_status()?
            .json::<VerifyResponse>()
            .await
            .map(Into::into)
            .context("Failed to parse bot detection response")
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest<'a> {
    check_level: ApiCheckLevel,
    client_ip: String,
    user_agent: Option<&'a str>,
    accept_language: Option<&'a str>,
    referer: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum ApiCheckLevel {
    Basic,
}

impl From<CheckLevel> for ApiCheckLevel {
    fn from(value: CheckLevel) -> Self {
        match value {
            CheckLevel::Basic => Self::Basic,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResponse {
    is_bot: bool,
}

impl From<VerifyResponse> for BotVerdict {
    fn from(value: VerifyResponse) -> Self {
        Self {
            is_bot: value.is_bot,
        }
    }
}
