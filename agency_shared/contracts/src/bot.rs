use std::future::Future;

use agency_models::request::RequestContext;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BotCheckService: Send + Sync + 'static {
    /// Check that the request was not made by an automated client.
    fn check(
        &self,
        request: &RequestContext,
    ) -> impl Future<Output = Result<(), BotCheckError>> + Send;
}

#[derive(Debug, Error)]
pub enum BotCheckError {
    #[error("The request was classified as automated.")]
    Blocked,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockBotCheckService {
    pub fn with_check(mut self, request: RequestContext, result: Result<(), BotCheckError>) -> Self {
        self.expect_check()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
