use serde::Deserialize;

use crate::{
    contact::{
        length_message, optional, parse_email, too_long_message, ContactMessage, ContactName,
        INVALID_EMAIL_MESSAGE, MESSAGE_MAX_LENGTH, MESSAGE_MIN_LENGTH, NAME_MAX_LENGTH,
        NAME_MIN_LENGTH,
    },
    email_address::EmailAddress,
    macros::nutype_string,
    submission::FieldErrors,
};

pub const PHONE_MAX_LENGTH: usize = 64;

/// A referral partner form as submitted by the website, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReferralForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// A validated referral partner form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralSubmission {
    pub name: ContactName,
    pub email: EmailAddress,
    pub phone: Option<ReferralPhone>,
    pub message: ContactMessage,
}

nutype_string!(ReferralPhone(validate(not_empty, len_char_max = 64)));

impl ReferralForm {
    /// Validate all fields, reporting every invalid field at once.
    pub fn validate(self) -> Result<ReferralSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = errors.check("name", ContactName::try_new(&*self.name), |_| {
            length_message("Name", &self.name, NAME_MIN_LENGTH, NAME_MAX_LENGTH)
        });
        let email = errors.check("email", parse_email(&self.email), |()| {
            INVALID_EMAIL_MESSAGE.into()
        });
        let phone = errors.check(
            "phone",
            optional(self.phone.as_deref(), |x| ReferralPhone::try_new(x)),
            |()| too_long_message(PHONE_MAX_LENGTH),
        );
        let message = errors.check("message", ContactMessage::try_new(&*self.message), |_| {
            length_message("Message", &self.message, MESSAGE_MIN_LENGTH, MESSAGE_MAX_LENGTH)
        });

        match (name, email, phone, message) {
            (Some(name), Some(email), Some(phone), Some(message)) if errors.is_empty() => {
                Ok(ReferralSubmission {
                    name,
                    email,
                    phone,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}
