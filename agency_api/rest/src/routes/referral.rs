use std::sync::Arc;

use agency_core_referral_contracts::{ReferralFeatureService, ReferralSubmitError};
use agency_models::referral::ReferralForm;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    routing, Json, Router,
};

use super::invalid_body;
use crate::{errors::submission_response, extractors::request_context::ApiRequestContext};

pub fn router(service: Arc<impl ReferralFeatureService>) -> Router<()> {
    Router::new()
        .route("/referral", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ReferralFeatureService>>,
    ApiRequestContext(request): ApiRequestContext,
    form: Result<Json<ReferralForm>, JsonRejection>,
) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return invalid_body(rejection),
    };

    let result = service.submit(form, request).await;
    let status = match &result {
        Ok(()) => StatusCode::OK,
        Err(ReferralSubmitError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(ReferralSubmitError::Bot) => StatusCode::FORBIDDEN,
        Err(ReferralSubmitError::BotCheckUnavailable | ReferralSubmitError::EmailNotConfigured) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        Err(ReferralSubmitError::Email) => StatusCode::BAD_GATEWAY,
    };

    submission_response(status, result)
}
