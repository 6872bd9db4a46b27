use agency_config::SentryConfig;
use agency_utils::agency_version;
use sentry::{integrations::tracing::EventFilter, ClientInitGuard};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log level used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info";

/// Log to stderr and forward warnings and errors to sentry.
pub fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .with(sentry::integrations::tracing::layer().event_filter(event_filter))
        .init();
}

/// Failed submissions are logged at `error` and become sentry exceptions.
fn event_filter(meta: &tracing::Metadata<'_>) -> EventFilter {
    match *meta.level() {
        Level::ERROR => EventFilter::Exception,
        Level::WARN => EventFilter::Event,
        Level::INFO | Level::DEBUG => EventFilter::Breadcrumb,
        Level::TRACE => EventFilter::Ignore,
    }
}

/// The returned guard flushes pending events when dropped.
pub fn init_sentry(config: &SentryConfig) -> ClientInitGuard {
    sentry::init((
        config.dsn.as_str(),
        sentry::ClientOptions {
            release: Some(agency_version().into()),
            environment: config.environment.clone().map(Into::into),
            attach_stacktrace: true,
            ..Default::default()
        },
    ))
}
