use std::sync::Arc;

use agency_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use agency_models::contact::ContactForm;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    routing, Json, Router,
};

use super::invalid_body;
use crate::{errors::submission_response, extractors::request_context::ApiRequestContext};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    ApiRequestContext(request): ApiRequestContext,
    form: Result<Json<ContactForm>, JsonRejection>,
) -> Response {
    let Json(form) = match form {
        Ok(form) => form,
        Err(rejection) => return invalid_body(rejection),
    };

    let result = service.submit(form, request).await;
    let status = match &result {
        Ok(()) => StatusCode::OK,
        Err(err) => status_code(err),
    };

    submission_response(status, result)
}

fn status_code(err: &ContactSubmitError) -> StatusCode {
    match err {
        ContactSubmitError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ContactSubmitError::Bot => StatusCode::FORBIDDEN,
        ContactSubmitError::BotCheckUnavailable
        | ContactSubmitError::EmailNotConfigured
        | ContactSubmitError::AudienceNotConfigured
        | ContactSubmitError::LeadsNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ContactSubmitError::Audience | ContactSubmitError::Lead | ContactSubmitError::Email => {
            StatusCode::BAD_GATEWAY
        }
    }
}
