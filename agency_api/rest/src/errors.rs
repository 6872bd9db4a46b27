use agency_models::submission::{SubmissionFailure, SubmissionResult};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub fn submission_response(status: StatusCode, result: impl Into<SubmissionResult>) -> Response {
    (status, Json(result.into())).into_response()
}

/// A failed submission with a message and no field errors.
pub fn failure(status: StatusCode, message: &str) -> Response {
    submission_response(
        status,
        SubmissionResult::Failure(SubmissionFailure::message(message)),
    )
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong. Please try again later.",
    )
}
