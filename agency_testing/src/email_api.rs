use std::{
    collections::HashSet,
    net::IpAddr,
    sync::{Arc, Mutex},
};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;
use uuid::Uuid;

use crate::authorized;

#[derive(Debug)]
struct EmailApiState {
    api_key: String,
    /// Audience contacts, as `(audience_id, email)`.
    contacts: Mutex<HashSet<(String, String)>>,
}

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting email api testing server on {host}:{port}");
    info!("Api url: http://{host}:{port}/");
    info!("Api key: {api_key:?}");
    info!("Emails are printed to the log instead of being delivered");

    let state = Arc::new(EmailApiState {
        api_key,
        contacts: Default::default(),
    });

    let router = Router::new()
        .route("/emails", routing::post(send_email))
        .route(
            "/audiences/:audience_id/contacts",
            routing::post(create_contact),
        )
        .with_state(state);

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

#[derive(Deserialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    reply_to: Option<String>,
    subject: String,
    text: String,
}

async fn send_email(
    state: State<Arc<EmailApiState>>,
    headers: HeaderMap,
    Json(request): Json<SendEmailRequest>,
) -> Response {
    if !authorized(&headers, &state.api_key) {
        return unauthorized();
    }

    let id = Uuid::now_v7();
    info!(
        %id,
        from = %request.from,
        to = ?request.to,
        reply_to = ?request.reply_to,
        subject = %request.subject,
        "Received email:\n{}",
        request.text
    );

    Json(json!({"id": id.to_string()})).into_response()
}

#[derive(Deserialize)]
struct CreateContactRequest {
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

async fn create_contact(
    state: State<Arc<EmailApiState>>,
    Path(audience_id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<CreateContactRequest>,
) -> Response {
    if !authorized(&headers, &state.api_key) {
        return unauthorized();
    }

    let inserted = match state.contacts.lock() {
        Ok(mut contacts) => contacts.insert((audience_id.clone(), request.email.clone())),
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    if !inserted {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "Contact already exists"})),
        )
            .into_response();
    }

    let id = Uuid::now_v7();
    info!(
        %id,
        %audience_id,
        email = %request.email,
        first_name = ?request.first_name,
        last_name = ?request.last_name,
        "Created audience contact"
    );

    Json(json!({"object": "contact", "id": id.to_string()})).into_response()
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"message": "Missing or invalid api key"})),
    )
        .into_response()
}
