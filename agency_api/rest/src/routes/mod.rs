use axum::{extract::rejection::JsonRejection, response::Response};
use tracing::debug;

use crate::errors::failure;

pub mod contact;
pub mod health;
pub mod referral;

fn invalid_body(rejection: JsonRejection) -> Response {
    debug!("rejected request body: {rejection}");
    failure(
        rejection.status(),
        "Invalid request. Please refresh and try again.",
    )
}
