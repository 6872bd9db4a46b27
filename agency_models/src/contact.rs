use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::{
    email_address::EmailAddress, macros::nutype_string, submission::FieldErrors,
};

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 256;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 4096;
pub const OPTIONAL_FIELD_MAX_LENGTH: usize = 256;

/// A contact form as submitted by the website, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub message: String,
}

/// A validated contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub company: Option<ContactCompany>,
    pub website: Option<ContactWebsite>,
    pub message: ContactMessage,
}

nutype_string!(ContactName(validate(len_char_min = 2, len_char_max = 256)));

nutype_string!(ContactCompany(validate(not_empty, len_char_max = 256)));

nutype_string!(ContactWebsite(validate(not_empty, len_char_max = 256)));

nutype_string!(ContactMessage(validate(len_char_min = 10, len_char_max = 4096)));

impl ContactForm {
    /// Validate all fields, reporting every invalid field at once.
    pub fn validate(self) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = errors.check("name", ContactName::try_new(&*self.name), |_| {
            length_message("Name", &self.name, NAME_MIN_LENGTH, NAME_MAX_LENGTH)
        });
        let email = errors.check("email", parse_email(&self.email), |()| {
            INVALID_EMAIL_MESSAGE.into()
        });
        let company = errors.check(
            "company",
            optional(self.company.as_deref(), |x| ContactCompany::try_new(x)),
            |()| too_long_message(OPTIONAL_FIELD_MAX_LENGTH),
        );
        let website = errors.check(
            "website",
            optional(self.website.as_deref(), |x| ContactWebsite::try_new(x)),
            |()| too_long_message(OPTIONAL_FIELD_MAX_LENGTH),
        );
        let message = errors.check("message", ContactMessage::try_new(&*self.message), |_| {
            length_message("Message", &self.message, MESSAGE_MIN_LENGTH, MESSAGE_MAX_LENGTH)
        });

        match (name, email, company, website, message) {
            (Some(name), Some(email), Some(company), Some(website), Some(message))
                if errors.is_empty() =>
            {
                Ok(ContactSubmission {
                    name,
                    email,
                    company,
                    website,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

pub(crate) const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Dotted domain ending in an alphabetic top-level label of at least two
/// characters.
static EMAIL_DOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$").unwrap());

pub(crate) fn parse_email(email: &str) -> Result<EmailAddress, ()> {
    email
        .trim()
        .parse::<EmailAddress>()
        .ok()
        .filter(|email| EMAIL_DOMAIN_REGEX.is_match(email.0.domain()))
        .ok_or(())
}

/// Validate an optional field, treating blank values as absent.
pub(crate) fn optional<T, E>(
    value: Option<&str>,
    validate: impl FnOnce(&str) -> Result<T, E>,
) -> Result<Option<T>, ()> {
    match value.map(str::trim).filter(|x| !x.is_empty()) {
        Some(value) => validate(value).map(Some).map_err(|_| ()),
        None => Ok(None),
    }
}

pub(crate) fn length_message(label: &str, value: &str, min: usize, max: usize) -> String {
    if value.trim().chars().count() < min {
        format!("{label} must be at least {min} characters.")
    } else {
        format!("{label} must be {max} characters or fewer.")
    }
}

pub(crate) fn too_long_message(max: usize) -> String {
    format!("Must be {max} characters or fewer.")
}
