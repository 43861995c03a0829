//! Development server for album UI development
//!
//! This binary runs the in-memory album backend with a small gallery of
//! seeded albums, so the UI hooks can be exercised without the real backend.
//!
//! Environment variables can be set directly or loaded from a .env file:
//! - IP_ADDRESS: bind address (defaults to 127.0.0.1)
//! - PORT: bind port (defaults to 0, an OS-assigned port)
//!
//! Usage: cargo run -p dev-server

use album_client::telemetry::{get_subscriber, init_subscriber, log_error};
use anyhow::{Context, Result};
use payloads::APIClient;
use test_helpers::{MockBackend, backend, mock::DevDataset};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber("info,test_helpers=debug"))?;

    let ip =
        std::env::var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into());
    let port = match std::env::var("PORT") {
        Ok(port) => port.parse::<u16>().context("PORT must be a port number")?,
        Err(_) => 0,
    };

    info!("🚀 Starting album development server");
    let (server, port) = backend::build(MockBackend::default(), &ip, port)?;
    let server = tokio::spawn(server);

    let address = format!("http://{ip}:{port}");
    info!("✅ Album backend running on {address}");

    info!("📊 Setting up development test data...");
    let dataset = DevDataset::create(&APIClient::new(address.clone())).await?;

    info!("🎯 Development server ready!");
    info!("   Albums: {address}/albums/view-all");
    info!("   UI:     cd ui && BACKEND_URL={address} trunk serve");
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::select! {
        result = server => {
            if let Err(e) = result.context("server task failed")? {
                log_error(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("🛑 Shutting down development server");
        }
    }
    Ok(())
}
