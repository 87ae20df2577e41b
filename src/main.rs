//! Dark Mode Toggle
//!
//! With the `server` feature this serves the server-rendered page; with `web`
//! it launches the Dioxus client app.

#[cfg(feature = "server")]
use dark_mode_toggle::{config, ui};

#[cfg(feature = "server")]
use anyhow::Result;
#[cfg(feature = "server")]
use std::net::SocketAddr;
#[cfg(feature = "server")]
use tokio::signal;
#[cfg(feature = "server")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dark_mode_toggle=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Dark Mode Toggle v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(
        "Configuration loaded, port: {}, storage key: {}, marker class: {}",
        config.port,
        config.dark_mode.storage_key,
        config.dark_mode.marker_class
    );

    let app = ui::router(ui::AppState::new(config.dark_mode));

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(dark_mode_toggle::app::App);
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
#[cfg(feature = "server")]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
