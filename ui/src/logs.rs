//! Logging to the browser console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Route hook logs to the browser console. Call once from the app's entry
/// point; later calls are ignored.
pub fn init_logging() {
    // Hook failures are logged at warn; request details at debug.
    let env_filter = EnvFilter::new("error,ui=debug,payloads=debug");

    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Album hooks logging to console");
    }
}
