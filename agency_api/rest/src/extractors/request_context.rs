use agency_models::request::RequestContext;
use anyhow::anyhow;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{
        header::{ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT},
        request::Parts,
        HeaderName,
    },
    response::Response,
};

use crate::{errors::internal_server_error, middlewares::client_ip::ClientIp};

/// The client information a form submission is checked against.
pub struct ApiRequestContext(pub RequestContext);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ApiRequestContext {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ClientIp(client_ip) = parts
            .extensions
            .get::<ClientIp>()
            .copied()
            .ok_or_else(|| internal_server_error(anyhow!("client ip has not been resolved")))?;

        Ok(Self(RequestContext {
            client_ip,
            user_agent: header(parts, USER_AGENT),
            accept_language: header(parts, ACCEPT_LANGUAGE),
            referer: header(parts, REFERER).or_else(|| header(parts, ORIGIN)),
        }))
    }
}

fn header(parts: &Parts, name: HeaderName) -> Option<String> {
    parts
        .headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
