use std::future::Future;

use agency_models::email_address::EmailAddressWithName;
use agency_templates_contracts::{
    ContactConfirmationTemplate, ContactNotificationTemplate, ReferralConfirmationTemplate,
    ReferralNotificationTemplate,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateEmailService: Send + Sync + 'static {
    fn send_contact_notification_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactNotificationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn send_contact_confirmation_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactConfirmationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn send_referral_notification_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ReferralNotificationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;

    fn send_referral_confirmation_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ReferralConfirmationTemplate,
    ) -> impl Future<Output = anyhow::Result<bool>> + Send;
}

#[cfg(feature = "mock")]
impl MockTemplateEmailService {
    pub fn with_send_contact_notification_email(
        mut self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: ContactNotificationTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_contact_notification_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(reply_to),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_contact_confirmation_email(
        mut self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: ContactConfirmationTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_contact_confirmation_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(reply_to),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_referral_notification_email(
        mut self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: ReferralNotificationTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_referral_notification_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(reply_to),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_referral_confirmation_email(
        mut self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: ReferralConfirmationTemplate,
        result: bool,
    ) -> Self {
        self.expect_send_referral_confirmation_email()
            .once()
            .with(
                mockall::predicate::eq(recipient),
                mockall::predicate::eq(reply_to),
                mockall::predicate::eq(data),
            )
            .return_once(move |_, _, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
