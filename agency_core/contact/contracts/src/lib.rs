use std::future::Future;

use agency_models::{
    contact::ContactForm,
    request::RequestContext,
    submission::{FieldErrors, SubmissionFailure},
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Process a submission of the contact form.
    ///
    /// On success the submitter has been added to the marketing audience, a
    /// lead has been recorded and both the internal notification and the
    /// confirmation email have been sent.
    fn submit(
        &self,
        form: ContactForm,
        request: RequestContext,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Invalid input.")]
    Invalid(FieldErrors),
    #[error("We couldn't verify your request. Please refresh and try again.")]
    Bot,
    #[error("Unable to verify your request at this time. Please try again later.")]
    BotCheckUnavailable,
    #[error("Email service is not configured. Please try again later.")]
    EmailNotConfigured,
    #[error("Audience management is not configured. Please try again later.")]
    AudienceNotConfigured,
    #[error("Lead management is not configured. Please try again later.")]
    LeadsNotConfigured,
    #[error("Failed to process your contact. Please try again later.")]
    Audience,
    #[error("Failed to record your inquiry. Please try again later.")]
    Lead,
    #[error("Failed to send confirmation email. Please try again later.")]
    Email,
}

impl From<ContactSubmitError> for SubmissionFailure {
    fn from(value: ContactSubmitError) -> Self {
        match value {
            ContactSubmitError::Invalid(errors) => Self::errors(errors),
            err => Self::message(err.to_string()),
        }
    }
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        form: ContactForm,
        request: RequestContext,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(
                mockall::predicate::eq(form),
                mockall::predicate::eq(request),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
