use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Allow the website to submit forms from the browser.
pub fn add<S: Clone + Send + Sync + 'static>(
    allowed_origins: Arc<[HeaderValue]>,
) -> impl FnOnce(Router<S>) -> Router<S> {
    move |router| {
        router.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE]),
        )
    }
}
