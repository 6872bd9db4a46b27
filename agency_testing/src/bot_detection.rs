use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

use crate::authorized;

const VERIFY_ROUTE: &str = "/verify";

pub async fn start_server(host: IpAddr, port: u16, secret: String) -> anyhow::Result<()> {
    info!("Starting bot detection testing server on {host}:{port}");
    info!("Verify endpoint: http://{host}:{port}{VERIFY_ROUTE}");
    info!("Secret: {secret:?}");
    info!("Requests without a user agent or with a user agent containing \"bot\" are bots");

    let router = Router::new()
        .route(VERIFY_ROUTE, routing::post(verify))
        .with_state(secret.into());

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyRequest {
    client_ip: String,
    user_agent: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResponse {
    is_bot: bool,
}

async fn verify(
    state: State<Arc<str>>,
    headers: HeaderMap,
    Json(VerifyRequest {
        client_ip,
        user_agent,
    }): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, StatusCode> {
    if !authorized(&headers, &state) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let is_bot = user_agent.map_or(true, |user_agent| user_agent.to_lowercase().contains("bot"));
    info!(%client_ip, is_bot, "Verified request");

    Ok(Json(VerifyResponse { is_bot }))
}
