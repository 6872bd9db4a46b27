use std::net::IpAddr;

/// Information about the HTTP request a form was submitted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub client_ip: IpAddr,
    pub user_agent: Option<String>,
    pub accept_language: Option<String>,
    pub referer: Option<String>,
}
