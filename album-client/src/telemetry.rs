//! Log setup for binaries and tests using the album client.

use anyhow::Context;
use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Log an error if it exists using the alternate selector, which emits the
/// error chain.
pub fn log_error(e: impl Into<anyhow::Error>) {
    let e: anyhow::Error = e.into();
    tracing::error!("{e:#}");
}

/// Build a subscriber writing pretty logs to stderr. `RUST_LOG` overrides
/// `default_filter` when set.
pub fn get_subscriber(
    default_filter: &str,
) -> impl Subscriber + Sync + Send + 'static {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let stderr = fmt::Layer::new()
        .with_writer(std::io::stderr)
        .pretty()
        .with_span_events(fmt::format::FmtSpan::CLOSE);
    Registry::default().with(env_filter).with(stderr)
}

/// Register a subscriber as global default and route `log` records into it.
///
/// Fails if a global subscriber is already set.
pub fn init_subscriber(
    subscriber: impl Subscriber + Sync + Send + 'static,
) -> anyhow::Result<()> {
    LogTracer::init().context("Failed to set logger")?;
    set_global_default(subscriber).context("Failed to set subscriber")?;
    Ok(())
}

/// Install the subscriber for a test process. Every test calls this, so
/// only the first call takes effect.
pub fn init_test_subscriber(default_filter: &str) {
    let _ = init_subscriber(get_subscriber(default_filter));
}
