use agency_demo::{
    contact::{CONTACT_FORM_FULL, CONTACT_FORM_MINIMAL},
    BRAND, INBOX, REQUEST_CONTEXT, SOURCE_DETAIL,
};
use agency_email_contracts::template::MockTemplateEmailService;
use agency_extern_contracts::{audience::MockAudienceApiService, leads::MockLeadsApiService};
use agency_shared_contracts::bot::MockBotCheckService;
use agency_utils::assert_matches;
use pretty_assertions::assert_eq;

use super::*;

#[tokio::test]
async fn ok() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let audience_api =
        MockAudienceApiService::new().with_create_contact(audience_contact(), Ok(()));

    let leads_api = MockLeadsApiService::new().with_create_lead(lead(), Ok(()));

    let template_email = MockTemplateEmailService::new()
        .with_send_contact_notification_email(inbox(), submitter(), notification(), true)
        .with_send_contact_confirmation_email(submitter(), inbox(), confirmation(), true);

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(template_email),
        audience_api: Some(audience_api),
        leads_api: Some(leads_api),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn ok_single_name_without_optionals() {
    // Arrange
    let submitter: EmailAddressWithName = "madonna@example.com".parse().unwrap();

    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let audience_api = MockAudienceApiService::new().with_create_contact(
        AudienceContact {
            email: "madonna@example.com".parse().unwrap(),
            first_name: Some("Madonna".into()),
            last_name: None,
            unsubscribed: false,
        },
        Ok(()),
    );

    let leads_api = MockLeadsApiService::new().with_create_lead(
        Lead {
            name: "Madonna".into(),
            email: "madonna@example.com".parse().unwrap(),
            company: None,
            website: None,
            message: Some("Hello World, how are you?".into()),
            source_detail: SOURCE_DETAIL.into(),
        },
        Ok(()),
    );

    let notification = ContactNotificationTemplate {
        name: "Madonna".into(),
        email: "madonna@example.com".into(),
        company: None,
        website: None,
        message_lines: vec!["Hello World, how are you?".into()],
    };

    let confirmation = ContactConfirmationTemplate {
        greeting: "Madonna".into(),
        name: "Madonna".into(),
        email: "madonna@example.com".into(),
        company: None,
        website: None,
        message_lines: vec!["Hello World, how are you?".into()],
        inbox: INBOX.into(),
        brand: BRAND.into(),
    };

    let template_email = MockTemplateEmailService::new()
        .with_send_contact_notification_email(inbox(), submitter.clone(), notification, true)
        .with_send_contact_confirmation_email(submitter, inbox(), confirmation, true);

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(template_email),
        audience_api: Some(audience_api),
        leads_api: Some(leads_api),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_MINIMAL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn ok_already_in_audience() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let audience_api = MockAudienceApiService::new().with_create_contact(
        audience_contact(),
        Err(AudienceCreateContactError::Rejected(
            "Contact Already Exists".into(),
        )),
    );

    let leads_api = MockLeadsApiService::new().with_create_lead(lead(), Ok(()));

    let template_email = MockTemplateEmailService::new()
        .with_send_contact_notification_email(inbox(), submitter(), notification(), true)
        .with_send_contact_confirmation_email(submitter(), inbox(), confirmation(), true);

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(template_email),
        audience_api: Some(audience_api),
        leads_api: Some(leads_api),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn invalid_website_is_not_forwarded_to_lead() {
    // Arrange
    let form = ContactForm {
        website: Some("exa mple.com".into()),
        ..CONTACT_FORM_FULL.clone()
    };

    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let audience_api =
        MockAudienceApiService::new().with_create_contact(audience_contact(), Ok(()));

    let leads_api = MockLeadsApiService::new().with_create_lead(
        Lead {
            website: None,
            ..lead()
        },
        Ok(()),
    );

    let template_email = MockTemplateEmailService::new()
        .with_send_contact_notification_email(
            inbox(),
            submitter(),
            ContactNotificationTemplate {
                website: Some("exa mple.com".into()),
                ..notification()
            },
            true,
        )
        .with_send_contact_confirmation_email(
            submitter(),
            inbox(),
            ContactConfirmationTemplate {
                website: Some("exa mple.com".into()),
                ..confirmation()
            },
            true,
        );

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(template_email),
        audience_api: Some(audience_api),
        leads_api: Some(leads_api),
        config: config(),
    };

    // Act
    let result = sut.submit(form, REQUEST_CONTEXT.clone()).await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn invalid_form() {
    // Arrange
    let form = ContactForm {
        email: "not-an-email".into(),
        message: "Too short".into(),
        ..CONTACT_FORM_FULL.clone()
    };

    let sut = ContactFeatureServiceImpl {
        bot_check: MockBotCheckService::new(),
        template_email: Some(MockTemplateEmailService::new()),
        audience_api: Some(MockAudienceApiService::new()),
        leads_api: Some(MockLeadsApiService::new()),
        config: config(),
    };

    // Act
    let result = sut.submit(form, REQUEST_CONTEXT.clone()).await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSubmitError::Invalid(errors))
            if errors.fields().collect::<Vec<_>>() == ["email", "message"]
    );
}

#[tokio::test]
async fn bot() {
    // Arrange
    let bot_check = MockBotCheckService::new()
        .with_check(REQUEST_CONTEXT.clone(), Err(BotCheckError::Blocked));

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(MockTemplateEmailService::new()),
        audience_api: Some(MockAudienceApiService::new()),
        leads_api: Some(MockLeadsApiService::new()),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "We couldn't verify your request. Please refresh and try again."
    );
    assert_matches!(err, ContactSubmitError::Bot);
}

#[tokio::test]
async fn bot_check_unavailable() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(
        REQUEST_CONTEXT.clone(),
        Err(BotCheckError::Other(anyhow::anyhow!("connection refused"))),
    );

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(MockTemplateEmailService::new()),
        audience_api: Some(MockAudienceApiService::new()),
        leads_api: Some(MockLeadsApiService::new()),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::BotCheckUnavailable));
}

#[tokio::test]
async fn email_not_configured() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: None::<MockTemplateEmailService>,
        audience_api: Some(MockAudienceApiService::new()),
        leads_api: Some(MockLeadsApiService::new()),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::EmailNotConfigured));
}

#[tokio::test]
async fn audience_not_configured() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(MockTemplateEmailService::new()),
        audience_api: None::<MockAudienceApiService>,
        leads_api: Some(MockLeadsApiService::new()),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::AudienceNotConfigured));
}

#[tokio::test]
async fn leads_not_configured() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(MockTemplateEmailService::new()),
        audience_api: Some(MockAudienceApiService::new()),
        leads_api: None::<MockLeadsApiService>,
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::LeadsNotConfigured));
}

#[tokio::test]
async fn audience_rejected() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let audience_api = MockAudienceApiService::new().with_create_contact(
        audience_contact(),
        Err(AudienceCreateContactError::Rejected(
            "Invalid `email` field.".into(),
        )),
    );

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(MockTemplateEmailService::new()),
        audience_api: Some(audience_api),
        leads_api: Some(MockLeadsApiService::new()),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to process your contact. Please try again later."
    );
    assert_matches!(err, ContactSubmitError::Audience);
}

#[tokio::test]
async fn audience_unreachable() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let audience_api = MockAudienceApiService::new().with_create_contact(
        audience_contact(),
        Err(AudienceCreateContactError::Other(anyhow::anyhow!(
            "dns error"
        ))),
    );

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(MockTemplateEmailService::new()),
        audience_api: Some(audience_api),
        leads_api: Some(MockLeadsApiService::new()),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Audience));
}

#[tokio::test]
async fn lead_error_status() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let audience_api =
        MockAudienceApiService::new().with_create_contact(audience_contact(), Ok(()));

    let leads_api = MockLeadsApiService::new().with_create_lead(
        lead(),
        Err(LeadCreateError::Status {
            status: 500,
            body: "Internal Server Error".into(),
        }),
    );

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(MockTemplateEmailService::new()),
        audience_api: Some(audience_api),
        leads_api: Some(leads_api),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to record your inquiry. Please try again later."
    );
    assert_matches!(err, ContactSubmitError::Lead);
}

#[tokio::test]
async fn lead_unreachable() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let audience_api =
        MockAudienceApiService::new().with_create_contact(audience_contact(), Ok(()));

    let leads_api = MockLeadsApiService::new().with_create_lead(
        lead(),
        Err(LeadCreateError::Other(anyhow::anyhow!("connection reset"))),
    );

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(MockTemplateEmailService::new()),
        audience_api: Some(audience_api),
        leads_api: Some(leads_api),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Lead));
}

#[tokio::test]
async fn notification_refused() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let audience_api =
        MockAudienceApiService::new().with_create_contact(audience_contact(), Ok(()));

    let leads_api = MockLeadsApiService::new().with_create_lead(lead(), Ok(()));

    let template_email = MockTemplateEmailService::new()
        .with_send_contact_notification_email(inbox(), submitter(), notification(), false)
        .with_send_contact_confirmation_email(submitter(), inbox(), confirmation(), true);

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(template_email),
        audience_api: Some(audience_api),
        leads_api: Some(leads_api),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to send confirmation email. Please try again later."
    );
    assert_matches!(err, ContactSubmitError::Email);
}

#[tokio::test]
async fn confirmation_error() {
    // Arrange
    let bot_check = MockBotCheckService::new().with_check(REQUEST_CONTEXT.clone(), Ok(()));

    let audience_api =
        MockAudienceApiService::new().with_create_contact(audience_contact(), Ok(()));

    let leads_api = MockLeadsApiService::new().with_create_lead(lead(), Ok(()));

    let mut template_email = MockTemplateEmailService::new().with_send_contact_notification_email(
        inbox(),
        submitter(),
        notification(),
        true,
    );
    template_email
        .expect_send_contact_confirmation_email()
        .once()
        .return_once(|_, _, _| {
            Box::pin(std::future::ready(Err(anyhow::anyhow!(
                "connection reset"
            ))))
        });

    let sut = ContactFeatureServiceImpl {
        bot_check,
        template_email: Some(template_email),
        audience_api: Some(audience_api),
        leads_api: Some(leads_api),
        config: config(),
    };

    // Act
    let result = sut
        .submit(CONTACT_FORM_FULL.clone(), REQUEST_CONTEXT.clone())
        .await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Email));
}

fn config() -> ContactFeatureConfig {
    ContactFeatureConfig {
        inbox: Arc::new(inbox()),
        brand: BRAND.into(),
        source_detail: SOURCE_DETAIL.into(),
    }
}

fn inbox() -> EmailAddressWithName {
    INBOX.parse().unwrap()
}

fn submitter() -> EmailAddressWithName {
    "jane.doe@example.com".parse().unwrap()
}

fn audience_contact() -> AudienceContact {
    AudienceContact {
        email: "jane.doe@example.com".parse().unwrap(),
        first_name: Some("Jane".into()),
        last_name: Some("Doe Smith".into()),
        unsubscribed: false,
    }
}

fn lead() -> Lead {
    Lead {
        name: "Jane Doe Smith".into(),
        email: "jane.doe@example.com".parse().unwrap(),
        company: Some("Acme Corp".into()),
        website: Some("https://acme.example".into()),
        message: Some("Hi there,\r\n\r\nwe are looking for help with our new website.".into()),
        source_detail: SOURCE_DETAIL.into(),
    }
}

fn expected_message_lines() -> Vec<String> {
    vec![
        "Hi there,".into(),
        "".into(),
        "we are looking for help with our new website.".into(),
    ]
}

fn notification() -> ContactNotificationTemplate {
    ContactNotificationTemplate {
        name: "Jane Doe Smith".into(),
        email: "jane.doe@example.com".into(),
        company: Some("Acme Corp".into()),
        website: Some("acme.example".into()),
        message_lines: expected_message_lines(),
    }
}

fn confirmation() -> ContactConfirmationTemplate {
    ContactConfirmationTemplate {
        greeting: "Jane".into(),
        name: "Jane Doe Smith".into(),
        email: "jane.doe@example.com".into(),
        company: Some("Acme Corp".into()),
        website: Some("acme.example".into()),
        message_lines: expected_message_lines(),
        inbox: INBOX.into(),
        brand: BRAND.into(),
    }
}
