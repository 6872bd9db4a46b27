use std::future::Future;

use agency_models::email_address::EmailAddress;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait AudienceApiService: Send + Sync + 'static {
    /// Add a contact to the marketing audience.
    fn create_contact(
        &self,
        contact: AudienceContact,
    ) -> impl Future<Output = Result<(), AudienceCreateContactError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudienceContact {
    pub email: EmailAddress,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub unsubscribed: bool,
}

#[derive(Debug, Error)]
pub enum AudienceCreateContactError {
    /// The provider answered with an error message.
    #[error("The audience api rejected the contact: {0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AudienceCreateContactError {
    /// Whether the contact is already part of the audience.
    pub fn is_already_exists(&self) -> bool {
        match self {
            Self::Rejected(message) => message.to_lowercase().contains("already exists"),
            Self::Other(_) => false,
        }
    }
}

#[cfg(feature = "mock")]
impl MockAudienceApiService {
    pub fn with_create_contact(
        mut self,
        contact: AudienceContact,
        result: Result<(), AudienceCreateContactError>,
    ) -> Self {
        self.expect_create_contact()
            .once()
            .with(mockall::predicate::eq(contact))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
