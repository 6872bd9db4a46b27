use agency_api_rest::{RestServerConfig, RestServerRealIpConfig};
use agency_config::Config;
use agency_core_contact_impl::ContactFeatureConfig;
use agency_core_referral_impl::ReferralFeatureConfig;
use agency_email_impl::EmailServiceConfig;
use agency_extern_impl::{
    audience::AudienceApiServiceConfig, bot_detection::BotDetectionApiServiceConfig,
    http::HttpClient, leads::LeadsApiServiceConfig,
};
use anyhow::{ensure, Context};
use axum::http::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use tracing::warn;
use types::{
    AudienceApi, BotCheck, BotDetectionApi, ContactFeature, Email, LeadsApi, ReferralFeature,
    RestServer, Template, TemplateEmail,
};

pub mod types;

/// Builds the services from the configuration.
///
/// Integrations without credentials are left out. Submissions that need them
/// are rejected at runtime.
#[derive(Debug)]
pub struct Provider<'a> {
    config: &'a Config,
    client: HttpClient,
}

impl<'a> Provider<'a> {
    pub fn new(config: &'a Config) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            client: HttpClient::new()?,
        })
    }

    pub fn rest_server(&self) -> anyhow::Result<RestServer> {
        let template_email = self.template_email()?;
        let bot_check = self.bot_check();

        let contact = ContactFeature::new(
            bot_check.clone(),
            template_email.clone(),
            self.audience_api(),
            self.leads_api(),
            ContactFeatureConfig {
                inbox: self.config.contact.inbox.clone().into(),
                brand: self.config.contact.brand.as_str().into(),
                source_detail: self.config.contact.source_detail.as_str().into(),
            },
        );

        let referral = ReferralFeature::new(
            bot_check,
            template_email,
            ReferralFeatureConfig {
                inbox: self.config.contact.inbox.clone().into(),
                brand: self.config.contact.brand.as_str().into(),
            },
        );

        Ok(RestServer::new(contact, referral, self.rest_server_config()?))
    }

    pub fn email(&self) -> Option<Email> {
        let config = &self.config.email;
        let Some(api_key) = &config.api_key else {
            warn!("Email api key is not configured, no emails will be sent");
            return None;
        };

        Some(Email::new(
            EmailServiceConfig {
                api_url: config.api_url.clone(),
                api_key: clone_secret(api_key),
                from: config.from.clone(),
            },
            self.client.clone(),
        ))
    }

    fn template_email(&self) -> anyhow::Result<Option<TemplateEmail>> {
        let Some(email) = self.email() else {
            return Ok(None);
        };

        Ok(Some(TemplateEmail::new(email, Template::new()?)))
    }

    fn bot_check(&self) -> BotCheck {
        let bot_detection_api = match &self.config.bot_detection {
            Some(config) => Some(BotDetectionApi::new(
                BotDetectionApiServiceConfig {
                    verify_endpoint: config.verify_endpoint.clone(),
                    secret: config.secret.as_ref().map(clone_secret),
                },
                self.client.clone(),
            )),
            None => {
                warn!("Bot detection is not configured, all form submissions are accepted");
                None
            }
        };

        BotCheck::new(bot_detection_api)
    }

    fn audience_api(&self) -> Option<AudienceApi> {
        let (Some(api_key), Some(audience_id)) =
            (&self.config.email.api_key, &self.config.audience.id)
        else {
            warn!("Audience is not configured, contact form submissions will fail");
            return None;
        };

        Some(AudienceApi::new(
            AudienceApiServiceConfig {
                api_url: self.config.email.api_url.clone(),
                api_key: clone_secret(api_key),
                audience_id: audience_id.clone(),
            },
            self.client.clone(),
        ))
    }

    fn leads_api(&self) -> Option<LeadsApi> {
        let (Some(endpoint), Some(token)) = (&self.config.leads.endpoint, &self.config.leads.token)
        else {
            warn!("Leads api is not configured, contact form submissions will fail");
            return None;
        };

        Some(LeadsApi::new(
            LeadsApiServiceConfig {
                endpoint: endpoint.clone(),
                token: clone_secret(token),
            },
            self.client.clone(),
        ))
    }

    fn rest_server_config(&self) -> anyhow::Result<RestServerConfig> {
        let http = &self.config.http;

        let allowed_origins = http
            .allowed_origins
            .iter()
            .map(|origin| {
                ensure!(origin != "*", "Wildcard origins are not allowed");
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid allowed origin {origin:?}"))
            })
            .collect::<anyhow::Result<_>>()?;

        Ok(RestServerConfig {
            address: http.address,
            real_ip: http.real_ip.as_ref().map(|real_ip| {
                RestServerRealIpConfig {
                    header: real_ip.header.clone(),
                    set_from: real_ip.set_from,
                }
                .into()
            }),
            allowed_origins,
        })
    }
}

fn clone_secret(secret: &SecretString) -> SecretString {
    secret.expose_secret().to_owned().into()
}
