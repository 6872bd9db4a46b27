use std::future::Future;

use agency_models::email_address::EmailAddress;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LeadsApiService: Send + Sync + 'static {
    /// Record a lead in the lead management system.
    fn create_lead(&self, lead: &Lead) -> impl Future<Output = Result<(), LeadCreateError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub email: EmailAddress,
    pub company: Option<String>,
    /// Normalized website, absent if it is not a valid URL.
    pub website: Option<String>,
    pub message: Option<String>,
    pub source_detail: String,
}

#[derive(Debug, Error)]
pub enum LeadCreateError {
    #[error("The leads api responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockLeadsApiService {
    pub fn with_create_lead(mut self, lead: Lead, result: Result<(), LeadCreateError>) -> Self {
        self.expect_create_lead()
            .once()
            .with(mockall::predicate::eq(lead))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
