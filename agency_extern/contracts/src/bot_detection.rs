use std::future::Future;

use agency_models::request::RequestContext;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BotDetectionApiService: Send + Sync + 'static {
    /// Ask the bot detection service whether the request was made by an
    /// automated client.
    fn verify(
        &self,
        request: &RequestContext,
        level: CheckLevel,
    ) -> impl Future<Output = anyhow::Result<BotVerdict>> + Send;
}

/// Depth of the analysis performed by the bot detection service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckLevel {
    Basic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotVerdict {
    pub is_bot: bool,
}

#[cfg(feature = "mock")]
impl MockBotDetectionApiService {
    pub fn with_verify(
        mut self,
        request: RequestContext,
        level: CheckLevel,
        result: BotVerdict,
    ) -> Self {
        self.expect_verify()
            .once()
            .with(
                mockall::predicate::eq(request),
                mockall::predicate::eq(level),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
