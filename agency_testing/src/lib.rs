use axum::http::{header::AUTHORIZATION, HeaderMap};

pub mod bot_detection;
pub mod email_api;
pub mod leads;

fn authorized(headers: &HeaderMap, token: &str) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        == Some(token)
}
