use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{
    extract::{ConnectInfo, Request},
    middleware::{from_fn, Next},
    Router,
};
use tracing::{debug, error, warn};

use crate::RestServerRealIpConfig;

pub fn add<S: Clone + Send + Sync + 'static>(
    real_ip_config: Option<Arc<RestServerRealIpConfig>>,
) -> impl FnOnce(Router<S>) -> Router<S> {
    move |router| {
        router.layer(from_fn(
            move |ConnectInfo(peer): ConnectInfo<SocketAddr>, mut request: Request, next: Next| {
                let client_ip =
                    ClientIp::from_request(peer.ip(), &request, real_ip_config.as_deref());
                request.extensions_mut().insert(client_ip);
                next.run(request)
            },
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientIp(pub IpAddr);

impl ClientIp {
    fn from_request(
        peer_ip: IpAddr,
        request: &Request,
        real_ip_config: Option<&RestServerRealIpConfig>,
    ) -> Self {
        let Some(RestServerRealIpConfig { header, set_from }) = real_ip_config else {
            return Self(peer_ip);
        };

        let header_value = request.headers().get(header);

        if *set_from != peer_ip {
            if let Some(header_value) = header_value {
                debug!(%peer_ip, ?header_value, "ignoring real ip header value from untrusted source");
            }
            return Self(peer_ip);
        }

        let Some(header_value) = header_value else {
            warn!(%peer_ip, "real ip header not found");
            return Self(peer_ip);
        };

        let Some(real_ip) = header_value
            .to_str()
            .ok()
            .and_then(|real_ip| real_ip.trim().parse().ok())
        else {
            error!(%peer_ip, ?header_value, "failed to parse real ip header value");
            return Self(peer_ip);
        };

        Self(real_ip)
    }
}
