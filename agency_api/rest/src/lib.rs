use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use agency_core_contact_contracts::ContactFeatureService;
use agency_core_referral_contracts::ReferralFeatureService;
use anyhow::Context;
use axum::{http::HeaderValue, Router};
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod extractors;
mod middlewares;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, Referral> {
    contact: Contact,
    referral: Referral,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub address: SocketAddr,
    pub real_ip: Option<Arc<RestServerRealIpConfig>>,
    /// Origins that may submit forms from the browser.
    pub allowed_origins: Arc<[HeaderValue]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestServerRealIpConfig {
    /// Header containing the client ip, usually set by a reverse proxy.
    pub header: String,
    /// Only trust the header on requests from this address.
    pub set_from: IpAddr,
}

impl<Contact, Referral> RestServer<Contact, Referral>
where
    Contact: ContactFeatureService,
    Referral: ReferralFeatureService,
{
    pub fn new(contact: Contact, referral: Referral, config: RestServerConfig) -> Self {
        Self {
            contact,
            referral,
            config,
        }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let address = self.config.address;
        let router = self.router();

        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("Failed to bind to {address}"))?;
        info!("Listening on {address}");

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::referral::router(self.referral.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        let router = middlewares::client_ip::add(self.config.real_ip)(router);
        middlewares::cors::add(self.config.allowed_origins)(router)
    }
}
