use std::sync::LazyLock;

use agency_models::contact::ContactForm;

pub static CONTACT_FORM_FULL: LazyLock<ContactForm> = LazyLock::new(|| ContactForm {
    name: "  Jane Doe Smith ".into(),
    email: "jane.doe@example.com".into(),
    company: Some("Acme Corp".into()),
    website: Some("acme.example".into()),
    message: "Hi there,\r\n\r\nwe are looking for help with our new website.".into(),
});

pub static CONTACT_FORM_MINIMAL: LazyLock<ContactForm> = LazyLock::new(|| ContactForm {
    name: "Madonna".into(),
    email: "madonna@example.com".into(),
    company: Some("   ".into()),
    website: None,
    message: "Hello World, how are you?".into(),
});
