//! Development server for reservations UI development
//!
//! This binary starts the API on an OS-assigned port with an in-memory store
//! full of demo reservations, so the UI can be developed without any other
//! backend running.
//!
//! Usage: cargo run -p dev-server
//!
//! Set DEV_RESERVATION_COUNT to change how many reservations are seeded.

use anyhow::{Context, Result};
use test_helpers::mock::DevDataset;
use tracing::info;

const DEFAULT_RESERVATION_COUNT: usize = 137;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting reservations development server");

    let count = match std::env::var("DEV_RESERVATION_COUNT") {
        Ok(raw) => raw
            .parse()
            .context("DEV_RESERVATION_COUNT must be a whole number")?,
        Err(_) => DEFAULT_RESERVATION_COUNT,
    };

    let app = test_helpers::spawn_app().await;
    info!("✅ API server running on http://127.0.0.1:{}", app.port);

    let dataset = DevDataset::create(&app, count).await?;

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
