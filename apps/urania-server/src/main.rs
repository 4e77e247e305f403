use std::sync::Arc;

use anyhow::Context;
use log::info;

use urania::SwissEphemerisAdapter;
use urania_server::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings =
        urania_config::load_server_settings().context("Failed to load server settings")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_filter.as_str()),
    )
    .init();

    // The ephemeris path is process-global in the C library; install it once
    // before the listener exists.
    let adapter = SwissEphemerisAdapter::new(settings.ephemeris_path.clone())
        .context("Failed to initialise the Swiss Ephemeris")?;
    let ephemeris_path = adapter.ephemeris_path().display().to_string();
    let state = AppState::new(Arc::new(adapter), &settings);

    let listener = tokio::net::TcpListener::bind((settings.bind_address.as_str(), settings.port))
        .await
        .with_context(|| format!("bind {}:{}", settings.bind_address, settings.port))?;

    info!("{} running on port {}", settings.service_name, settings.port);
    info!("Access at: http://localhost:{}", settings.port);
    info!("Ephemeris data: {}", ephemeris_path);
    info!("Available endpoints:");
    info!("  POST /api/planets - Get planetary positions");
    info!("  POST /api/houses  - Get house cusps");
    info!("  POST /api/chart   - Get complete chart data");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
