//! Kitchio web server.
//!
//! Serves the marketing pages and the two contact submission endpoints.
//! Configuration comes from the environment; the process refuses to start
//! without the reCAPTCHA secret and the Discord webhook URL.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kitchio::web::router;
use kitchio::{AppState, CaptchaVerifier, Config, Notifier};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("site_server_starting");

    let config = Config::from_env().context("Invalid configuration")?;
    info!(
        port = config.port,
        recaptcha_verify_url = %config.recaptcha_verify_url,
        request_timeout_ms = config.request_timeout_ms,
        "config_loaded"
    );

    // One shared HTTP client for both outbound integrations
    let client = Client::builder()
        .build()
        .context("Failed to create HTTP client")?;

    let captcha = CaptchaVerifier::new(
        client.clone(),
        config.recaptcha_verify_url.clone(),
        config.recaptcha_secret.clone(),
        config.request_timeout(),
    );
    let notifier = Notifier::new(
        client,
        config.discord_webhook_url.clone(),
        config.request_timeout(),
    );

    let state = AppState::new(config.clone(), captcha, notifier);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "site_server_listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("site_server_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
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
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("site_server_shutting_down");
}
