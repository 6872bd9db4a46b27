use std::future::Future;

use agency_models::{
    referral::ReferralForm,
    request::RequestContext,
    submission::{FieldErrors, SubmissionFailure},
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ReferralFeatureService: Send + Sync + 'static {
    /// Process a submission of the referral partner form.
    fn submit(
        &self,
        form: ReferralForm,
        request: RequestContext,
    ) -> impl Future<Output = Result<(), ReferralSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ReferralSubmitError {
    #[error("Invalid input.")]
    Invalid(FieldErrors),
    #[error("We couldn't verify your request. Please refresh and try again.")]
    Bot,
    #[error("Unable to verify your request at this time. Please try again later.")]
    BotCheckUnavailable,
    #[error("Email service is not configured. Please try again later.")]
    EmailNotConfigured,
    #[error("Failed to send your message. Please try again later.")]
    Email,
}

impl From<ReferralSubmitError> for SubmissionFailure {
    fn from(value: ReferralSubmitError) -> Self {
        match value {
            ReferralSubmitError::Invalid(errors) => Self::errors(errors),
            err => Self::message(err.to_string()),
        }
    }
}

#[cfg(feature = "mock")]
impl MockReferralFeatureService {
    pub fn with_submit(
        mut self,
        form: ReferralForm,
        request: RequestContext,
        result: Result<(), ReferralSubmitError>,
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
