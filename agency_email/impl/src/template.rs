use agency_email_contracts::{template::TemplateEmailService, Email, EmailService};
use agency_models::email_address::EmailAddressWithName;
use agency_templates_contracts::{
    ContactConfirmationTemplate, ContactNotificationTemplate, ReferralConfirmationTemplate,
    ReferralNotificationTemplate, Template, TemplateService,
};

#[derive(Debug, Clone)]
pub struct TemplateEmailServiceImpl<Email, Template> {
    email: Email,
    template: Template,
}

impl<Email, Template> TemplateEmailServiceImpl<Email, Template> {
    pub fn new(email: Email, template: Template) -> Self {
        Self { email, template }
    }
}

impl<EmailS, Template> TemplateEmailService for TemplateEmailServiceImpl<EmailS, Template>
where
    EmailS: EmailService,
    Template: TemplateService,
{
    async fn send_contact_notification_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactNotificationTemplate,
    ) -> anyhow::Result<bool> {
        let subject = format!("New inquiry from {}", data.name);
        self.send_email(recipient, reply_to, data, subject).await
    }

    async fn send_contact_confirmation_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ContactConfirmationTemplate,
    ) -> anyhow::Result<bool> {
        let subject = format!("Thanks for contacting {}", data.brand);
        self.send_email(recipient, reply_to, data, subject).await
    }

    async fn send_referral_notification_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ReferralNotificationTemplate,
    ) -> anyhow::Result<bool> {
        let subject = format!("Referral partner inquiry from {}", data.name);
        self.send_email(recipient, reply_to, data, subject).await
    }

    async fn send_referral_confirmation_email(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &ReferralConfirmationTemplate,
    ) -> anyhow::Result<bool> {
        let subject = format!("Thanks for reaching out to {}", data.brand);
        self.send_email(recipient, reply_to, data, subject).await
    }
}

impl<EmailS, TemplateS> TemplateEmailServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn send_email<T: Template + 'static>(
        &self,
        recipient: EmailAddressWithName,
        reply_to: EmailAddressWithName,
        data: &T,
        subject: String,
    ) -> anyhow::Result<bool> {
        self.email
            .send(Email {
                recipient,
                subject,
                body: self.template.render(data)?,
                reply_to: Some(reply_to),
            })
            .await
    }
}
