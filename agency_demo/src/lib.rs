use std::sync::LazyLock;

use agency_models::request::RequestContext;

pub mod contact;
pub mod referral;

pub const INBOX: &str = "hello@placetostandagency.com";
pub const BRAND: &str = "Place To Stand";
pub const SOURCE_DETAIL: &str = "https://placetostandagency.com/";

pub static REQUEST_CONTEXT: LazyLock<RequestContext> = LazyLock::new(|| RequestContext {
    client_ip: [203, 0, 113, 7].into(),
    user_agent: Some(
        "Mozilla/5.0 (X11; Linux x86_64; rv:131.0) Gecko/20100101 Firefox/131.0".into(),
    ),
    accept_language: Some("en-US,en;q=0.5".into()),
    referer: Some("https://placetostandagency.com/contact".into()),
});
