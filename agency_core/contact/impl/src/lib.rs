use std::sync::Arc;

use agency_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use agency_email_contracts::template::TemplateEmailService;
use agency_extern_contracts::{
    audience::{AudienceApiService, AudienceContact, AudienceCreateContactError},
    leads::{Lead, LeadCreateError, LeadsApiService},
};
use agency_models::{
    contact::{ContactForm, ContactSubmission},
    email_address::{EmailAddress, EmailAddressWithName},
    message::message_lines,
    name::PersonName,
    request::RequestContext,
    website::Website,
};
use agency_shared_contracts::bot::{BotCheckError, BotCheckService};
use agency_templates_contracts::{ContactConfirmationTemplate, ContactNotificationTemplate};
use tracing::{debug, error, info, warn};

#[cfg(test)]
mod tests;

/// Processes contact form submissions.
///
/// The email, audience and leads integrations are optional. If one of them is
/// missing, submissions fail before any external side effect.
#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<BotCheck, TemplateEmail, AudienceApi, LeadsApi> {
    bot_check: BotCheck,
    template_email: Option<TemplateEmail>,
    audience_api: Option<AudienceApi>,
    leads_api: Option<LeadsApi>,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Recipient of internal notifications.
    pub inbox: Arc<EmailAddressWithName>,
    pub brand: Arc<str>,
    /// Attached to every lead to identify the website.
    pub source_detail: Arc<str>,
}

impl<BotCheck, TemplateEmail, AudienceApi, LeadsApi>
    ContactFeatureServiceImpl<BotCheck, TemplateEmail, AudienceApi, LeadsApi>
{
    pub fn new(
        bot_check: BotCheck,
        template_email: Option<TemplateEmail>,
        audience_api: Option<AudienceApi>,
        leads_api: Option<LeadsApi>,
        config: ContactFeatureConfig,
    ) -> Self {
        Self {
            bot_check,
            template_email,
            audience_api,
            leads_api,
            config,
        }
    }
}

impl<BotCheck, TemplateEmail, AudienceApi, LeadsApi> ContactFeatureService
    for ContactFeatureServiceImpl<BotCheck, TemplateEmail, AudienceApi, LeadsApi>
where
    BotCheck: BotCheckService,
    TemplateEmail: TemplateEmailService,
    AudienceApi: AudienceApiService,
    LeadsApi: LeadsApiService,
{
    async fn submit(
        &self,
        form: ContactForm,
        request: RequestContext,
    ) -> Result<(), ContactSubmitError> {
        let submission = form.validate().map_err(|errors| {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "invalid contact form");
            ContactSubmitError::Invalid(errors)
        })?;

        self.check_bot(&request).await?;

        let integrations = self
            .integrations()
            .inspect_err(|err| error!("Cannot process contact form: {err}"))?;

        let details = ContactDetails::from(submission);

        self.add_to_audience(integrations.audience_api, &details)
            .await?;
        self.create_lead(integrations.leads_api, &details).await?;
        self.send_emails(integrations.template_email, &details)
            .await?;

        info!(client_ip = %request.client_ip, "processed contact form");

        Ok(())
    }
}

/// The integrations a contact submission needs, all of them configured.
struct Integrations<'a, TemplateEmail, AudienceApi, LeadsApi> {
    template_email: &'a TemplateEmail,
    audience_api: &'a AudienceApi,
    leads_api: &'a LeadsApi,
}

/// Everything derived from a validated submission.
struct ContactDetails {
    name: PersonName,
    email: EmailAddress,
    company: Option<String>,
    website: Option<Website>,
    message: String,
}

impl From<ContactSubmission> for ContactDetails {
    fn from(value: ContactSubmission) -> Self {
        Self {
            name: PersonName::new(&value.name),
            email: value.email,
            company: value.company.map(|x| x.into_inner()),
            website: value.website.and_then(|x| Website::new(&x)),
            message: value.message.into_inner(),
        }
    }
}

impl<BotCheck, TemplateEmail, AudienceApi, LeadsApi>
    ContactFeatureServiceImpl<BotCheck, TemplateEmail, AudienceApi, LeadsApi>
where
    BotCheck: BotCheckService,
    TemplateEmail: TemplateEmailService,
    AudienceApi: AudienceApiService,
    LeadsApi: LeadsApiService,
{
    async fn check_bot(&self, request: &RequestContext) -> Result<(), ContactSubmitError> {
        self.bot_check
            .check(request)
            .await
            .map_err(|err| match err {
                BotCheckError::Blocked => {
                    warn!(client_ip = %request.client_ip, "blocked automated contact form submission");
                    ContactSubmitError::Bot
                }
                BotCheckError::Other(err) => {
                    error!("Bot detection failed: {err:#}");
                    ContactSubmitError::BotCheckUnavailable
                }
            })
    }

    fn integrations(
        &self,
    ) -> Result<Integrations<'_, TemplateEmail, AudienceApi, LeadsApi>, ContactSubmitError> {
        Ok(Integrations {
            template_email: self
                .template_email
                .as_ref()
                .ok_or(ContactSubmitError::EmailNotConfigured)?,
            audience_api: self
                .audience_api
                .as_ref()
                .ok_or(ContactSubmitError::AudienceNotConfigured)?,
            leads_api: self
                .leads_api
                .as_ref()
                .ok_or(ContactSubmitError::LeadsNotConfigured)?,
        })
    }

    async fn add_to_audience(
        &self,
        audience_api: &AudienceApi,
        details: &ContactDetails,
    ) -> Result<(), ContactSubmitError> {
        let contact = AudienceContact {
            email: details.email.clone(),
            first_name: details.name.first_name().map(Into::into),
            last_name: details.name.last_name().map(Into::into),
            unsubscribed: false,
        };

        match audience_api.create_contact(contact).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_already_exists() => {
                debug!("contact is already part of the audience");
                Ok(())
            }
            Err(AudienceCreateContactError::Rejected(message)) => {
                error!(%message, "Failed to add contact to audience");
                Err(ContactSubmitError::Audience)
            }
            Err(AudienceCreateContactError::Other(err)) => {
                error!("Failed to add contact to audience: {err:#}");
                Err(ContactSubmitError::Audience)
            }
        }
    }

    async fn create_lead(
        &self,
        leads_api: &LeadsApi,
        details: &ContactDetails,
    ) -> Result<(), ContactSubmitError> {
        let lead = Lead {
            name: details.name.full().into(),
            email: details.email.clone(),
            company: details.company.clone(),
            website: details
                .website
                .as_ref()
                .and_then(Website::normalized)
                .map(Into::into),
            message: Some(details.message.clone()).filter(|x| !x.is_empty()),
            source_detail: self.config.source_detail.to_string(),
        };

        leads_api.create_lead(&lead).await.map_err(|err| {
            match err {
                LeadCreateError::Status { status, body } => {
                    error!(status, %body, payload = ?lead, "Failed to create lead");
                }
                LeadCreateError::Other(err) => {
                    error!(payload = ?lead, "Failed to create lead: {err:#}");
                }
            }
            ContactSubmitError::Lead
        })
    }

    async fn send_emails(
        &self,
        template_email: &TemplateEmail,
        details: &ContactDetails,
    ) -> Result<(), ContactSubmitError> {
        let inbox = (*self.config.inbox).clone();
        let submitter = EmailAddressWithName::from(details.email.clone());

        let notification = ContactNotificationTemplate {
            name: details.name.full().into(),
            email: details.email.to_string(),
            company: details.company.clone(),
            website: details.website.as_ref().map(|x| x.raw().into()),
            message_lines: message_lines(&details.message),
        };

        let confirmation = ContactConfirmationTemplate {
            greeting: details.name.greeting().into(),
            name: notification.name.clone(),
            email: notification.email.clone(),
            company: notification.company.clone(),
            website: notification.website.clone(),
            message_lines: notification.message_lines.clone(),
            inbox: inbox.email().into(),
            brand: self.config.brand.to_string(),
        };

        let notification_sent = template_email
            .send_contact_notification_email(inbox.clone(), submitter.clone(), &notification)
            .await;
        let notification_sent = check_sent("notification", notification_sent);

        let confirmation_sent = template_email
            .send_contact_confirmation_email(submitter, inbox, &confirmation)
            .await;
        let confirmation_sent = check_sent("confirmation", confirmation_sent);

        (notification_sent && confirmation_sent)
            .then_some(())
            .ok_or(ContactSubmitError::Email)
    }
}

fn check_sent(kind: &str, result: anyhow::Result<bool>) -> bool {
    match result {
        Ok(true) => true,
        Ok(false) => {
            error!("The email service refused the contact {kind} email");
            false
        }
        Err(err) => {
            error!("Failed to send contact {kind} email: {err:#}");
            false
        }
    }
}
