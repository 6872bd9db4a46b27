use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::info;
use uuid::Uuid;

use crate::authorized;

const LEADS_ROUTE: &str = "/api/leads";

pub async fn start_server(host: IpAddr, port: u16, token: String) -> anyhow::Result<()> {
    info!("Starting leads testing server on {host}:{port}");
    info!("Leads endpoint: http://{host}:{port}{LEADS_ROUTE}");
    info!("Token: {token:?}");

    let router = Router::new()
        .route(LEADS_ROUTE, routing::post(create_lead))
        .with_state(token.into());

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateLeadRequest {
    name: String,
    email: String,
    company: Option<String>,
    website: Option<String>,
    message: Option<String>,
    source_detail: String,
}

async fn create_lead(
    state: State<Arc<str>>,
    headers: HeaderMap,
    Json(lead): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if !authorized(&headers, &state) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let id = Uuid::now_v7();
    info!(
        %id,
        name = %lead.name,
        email = %lead.email,
        company = ?lead.company,
        website = ?lead.website,
        message = ?lead.message,
        source_detail = %lead.source_detail,
        "Created lead"
    );

    Ok((StatusCode::CREATED, Json(json!({"id": id.to_string()}))))
}
