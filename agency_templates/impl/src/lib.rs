use std::sync::Arc;

use agency_templates_contracts::{Template, TemplateService, TEMPLATES};
use anyhow::Context;
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    /// Compile all email templates.
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template)
                .with_context(|| format!("Failed to compile template {name}"))?;
        }

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.tera.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use agency_templates_contracts::{
        ContactConfirmationTemplate, ContactNotificationTemplate, ReferralConfirmationTemplate,
        ReferralNotificationTemplate,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(template: &(impl Template + 'static)) -> String {
        TemplateServiceImpl::new().unwrap().render(template).unwrap()
    }

    #[test]
    fn contact_notification() {
        let result = render(&ContactNotificationTemplate {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: Some("Acme".into()),
            website: Some("acme.example".into()),
            message_lines: vec!["Hello,".into(), "".into(), "we need a website.".into()],
        });

        assert_eq!(
            result,
            "Name: Jane Doe\nEmail: jane@example.com\nCompany: Acme\nWebsite: acme.example\n\
             \nMessage:\nHello,\n\nwe need a website.\n"
        );
    }

    #[test]
    fn contact_notification_without_optionals() {
        let result = render(&ContactNotificationTemplate {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: None,
            website: None,
            message_lines: vec!["Hello World, how are you?".into()],
        });

        assert_eq!(
            result,
            "Name: Jane Doe\nEmail: jane@example.com\n\nMessage:\nHello World, how are you?\n"
        );
    }

    #[test]
    fn contact_confirmation() {
        let result = render(&ContactConfirmationTemplate {
            greeting: "Jane".into(),
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: None,
            website: Some("acme.example".into()),
            message_lines: vec!["Hello World, how are you?".into()],
            inbox: "hello@example.com".into(),
            brand: "Place To Stand".into(),
        });

        assert!(result.starts_with("Hi Jane,\n\nThanks for reaching out to Place To Stand."));
        assert!(result.contains("\nWebsite: acme.example\n"));
        assert!(!result.contains("Company:"));
        assert!(result.contains("please reach out to hello@example.com."));
        assert!(result.ends_with("Talk soon,\nThe Place To Stand Team\n"));
    }

    #[test]
    fn text_is_not_escaped() {
        let result = render(&ReferralNotificationTemplate {
            name: "Sam O'Brien".into(),
            email: "sam@example.com".into(),
            phone: None,
            message: "Tom & Jerry <3".into(),
        });

        assert!(result.starts_with("New referral partner inquiry from Sam O'Brien\n"));
        assert!(result.ends_with("\nMessage:\nTom & Jerry <3\n"));
    }

    #[test]
    fn referral_notification_with_phone() {
        let result = render(&ReferralNotificationTemplate {
            name: "Sam Partner".into(),
            email: "sam@example.com".into(),
            phone: Some("+1 555 0100".into()),
            message: "Let's talk.".into(),
        });

        assert_eq!(
            result,
            "New referral partner inquiry from Sam Partner\n\nContact Details:\n  Name: Sam \
             Partner\n  Email: sam@example.com\n  Phone: +1 555 0100\n\nMessage:\nLet's talk.\n"
        );
    }

    #[test]
    fn referral_confirmation() {
        let result = render(&ReferralConfirmationTemplate {
            greeting: "Sam".into(),
            name: "Sam Partner".into(),
            email: "sam@example.com".into(),
            phone: None,
            message: "Let's talk.".into(),
            brand: "Place To Stand".into(),
        });

        assert!(result.starts_with(
            "Hi Sam,\n\nThanks for reaching out about partnering with Place To Stand."
        ));
        assert!(!result.contains("Phone:"));
        assert!(result.ends_with("Best,\nThe Place To Stand Team\n"));
    }
}
