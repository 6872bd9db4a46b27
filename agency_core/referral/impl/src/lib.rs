use std::sync::Arc;

use agency_core_referral_contracts::{ReferralFeatureService, ReferralSubmitError};
use agency_email_contracts::template::TemplateEmailService;
use agency_models::{
    email_address::EmailAddressWithName, name::PersonName, referral::ReferralForm,
    request::RequestContext,
};
use agency_shared_contracts::bot::{BotCheckError, BotCheckService};
use agency_templates_contracts::{ReferralConfirmationTemplate, ReferralNotificationTemplate};
use tracing::{debug, error, info, warn};

/// Processes referral partner form submissions.
///
/// Referral inquiries are only forwarded by email.
#[derive(Debug, Clone)]
pub struct ReferralFeatureServiceImpl<BotCheck, TemplateEmail> {
    bot_check: BotCheck,
    template_email: Option<TemplateEmail>,
    config: ReferralFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ReferralFeatureConfig {
    pub inbox: Arc<EmailAddressWithName>,
    pub brand: Arc<str>,
}

impl<BotCheck, TemplateEmail> ReferralFeatureServiceImpl<BotCheck, TemplateEmail> {
    pub fn new(
        bot_check: BotCheck,
        template_email: Option<TemplateEmail>,
        config: ReferralFeatureConfig,
    ) -> Self {
        Self {
            bot_check,
            template_email,
            config,
        }
    }
}

impl<BotCheck, TemplateEmail> ReferralFeatureService
    for ReferralFeatureServiceImpl<BotCheck, TemplateEmail>
where
    BotCheck: BotCheckService,
    TemplateEmail: TemplateEmailService,
{
    async fn submit(
        &self,
        form: ReferralForm,
        request: RequestContext,
    ) -> Result<(), ReferralSubmitError> {
        let submission = form.validate().map_err(|errors| {
            debug!(fields = ?errors.fields().collect::<Vec<_>>(), "invalid referral form");
            ReferralSubmitError::Invalid(errors)
        })?;

        self.bot_check
            .check(&request)
            .await
            .map_err(|err| match err {
                BotCheckError::Blocked => {
                    warn!(client_ip = %request.client_ip, "blocked automated referral form submission");
                    ReferralSubmitError::Bot
                }
                BotCheckError::Other(err) => {
                    error!("Bot detection failed: {err:#}");
                    ReferralSubmitError::BotCheckUnavailable
                }
            })?;

        let template_email = self
            .template_email
            .as_ref()
            .ok_or(ReferralSubmitError::EmailNotConfigured)
            .inspect_err(|err| error!("Cannot process referral form: {err}"))?;

        let name = PersonName::new(&submission.name);
        let email = submission.email.to_string();
        let phone = submission.phone.map(|x| x.into_inner());
        let message = submission.message.into_inner();

        let inbox = (*self.config.inbox).clone();
        let submitter = EmailAddressWithName::from(submission.email);

        let notification = ReferralNotificationTemplate {
            name: name.full().into(),
            email: email.clone(),
            phone: phone.clone(),
            message: message.clone(),
        };

        let confirmation = ReferralConfirmationTemplate {
            greeting: name.greeting().into(),
            name: name.full().into(),
            email,
            phone,
            message,
            brand: self.config.brand.to_string(),
        };

        let notification_sent = template_email
            .send_referral_notification_email(inbox.clone(), submitter.clone(), &notification)
            .await;
        let notification_sent = check_sent("notification", notification_sent);

        let confirmation_sent = template_email
            .send_referral_confirmation_email(submitter, inbox, &confirmation)
            .await;
        let confirmation_sent = check_sent("confirmation", confirmation_sent);

        if !(notification_sent && confirmation_sent) {
            return Err(ReferralSubmitError::Email);
        }

        info!(client_ip = %request.client_ip, "processed referral form");

        Ok(())
    }
}

fn check_sent(kind: &str, result: anyhow::Result<bool>) -> bool {
    match result {
        Ok(true) => true,
        Ok(false) => {
            error!("The email service refused the referral {kind} email");
            false
        }
        Err(err) => {
            error!("Failed to send referral {kind} email: {err:#}");
            false
        }
    }
}
