use agency_extern_contracts::bot_detection::{BotDetectionApiService, CheckLevel};
use agency_models::request::RequestContext;
use agency_shared_contracts::bot::{BotCheckError, BotCheckService};
use tracing::error;

/// Blocks automated requests using the bot detection service.
///
/// If no bot detection service is configured, every request passes and is
/// logged as unchecked. Errors of the bot detection service are never treated
/// as a pass.
#[derive(Debug, Clone)]
pub struct BotCheckServiceImpl<BotDetectionApi> {
    bot_detection_api: Option<BotDetectionApi>,
}

impl<BotDetectionApi> BotCheckServiceImpl<BotDetectionApi> {
    pub fn new(bot_detection_api: Option<BotDetectionApi>) -> Self {
        Self { bot_detection_api }
    }
}

impl<BotDetectionApi> BotCheckService for BotCheckServiceImpl<BotDetectionApi>
where
    BotDetectionApi: BotDetectionApiService,
{
    async fn check(&self, request: &RequestContext) -> Result<(), BotCheckError> {
        let Some(bot_detection_api) = &self.bot_detection_api else {
            error!(
                client_ip = %request.client_ip,
                "Bot detection is not configured, accepting unchecked request"
            );
            return Ok(());
        };

        let verdict = bot_detection_api.verify(request, CheckLevel::Basic).await?;
        (!verdict.is_bot).then_some(()).ok_or(BotCheckError::Blocked)
    }
}

#[cfg(test)]
mod tests {
    use agency_demo::REQUEST_CONTEXT;
    use agency_extern_contracts::bot_detection::{BotVerdict, MockBotDetectionApiService};
    use agency_utils::assert_matches;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let bot_detection_api = Some(MockBotDetectionApiService::new().with_verify(
            REQUEST_CONTEXT.clone(),
            CheckLevel::Basic,
            BotVerdict { is_bot: false },
        ));

        let sut = BotCheckServiceImpl { bot_detection_api };

        // Act
        let result = sut.check(&REQUEST_CONTEXT).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn ok_disabled() {
        // Arrange
        let sut = BotCheckServiceImpl {
            bot_detection_api: None::<MockBotDetectionApiService>,
        };

        // Act
        let result = sut.check(&REQUEST_CONTEXT).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn blocked() {
        // Arrange
        let bot_detection_api = Some(MockBotDetectionApiService::new().with_verify(
            REQUEST_CONTEXT.clone(),
            CheckLevel::Basic,
            BotVerdict { is_bot: true },
        ));

        let sut = BotCheckServiceImpl { bot_detection_api };

        // Act
        let result = sut.check(&REQUEST_CONTEXT).await;

        // Assert
        assert_matches!(result, Err(BotCheckError::Blocked));
    }

    #[tokio::test]
    async fn detector_error() {
        // Arrange
        let mut bot_detection_api = MockBotDetectionApiService::new();
        bot_detection_api
            .expect_verify()
            .once()
            .return_once(|_, _| Box::pin(std::future::ready(Err(anyhow::anyhow!("timeout")))));

        let sut = BotCheckServiceImpl {
            bot_detection_api: Some(bot_detection_api),
        };

        // Act
        let result = sut.check(&REQUEST_CONTEXT).await;

        // Assert
        assert_matches!(result, Err(BotCheckError::Other(_)));
    }
}
