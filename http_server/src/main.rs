//! Main entry point for the site server binary

use anyhow::Result;
use core_lib::{create_app, run_server, AppConfig, AppState, SmtpRelay};
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    info!("Configuration loaded successfully");
    info!("Server will bind to: {}", config.bind_address());
    info!("Serving assets from: {}", config.site.public_dir.display());

    let addr: SocketAddr = config.bind_address().parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let email = config.email.clone();
    let mut state = AppState::new(config);

    if email.is_enabled() {
        let relay = SmtpRelay::new(email.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize email relay: {}", e))?;
        info!(
            "Email relay enabled via {}:{} ({} receiver(s))",
            email.smtp_host,
            email.smtp_port,
            email.receivers().len()
        );
        if email.receivers().is_empty() {
            warn!("No receiver address configured; contact submissions will fail to send");
        }
        state = state.with_relay(Arc::new(relay));
    } else {
        warn!("Email relay disabled; contact submissions will be accepted but not delivered");
    }

    info!("App: {} v{}", state.app_name, state.version);

    let app = create_app(state);

    run_server(app, addr).await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            let default_level = if cfg!(debug_assertions) {
                "debug"
            } else {
                "info"
            };

            format!(
                "{}={},core_lib={},tower_http=debug,axum=debug",
                env!("CARGO_CRATE_NAME").replace('-', "_"),
                default_level,
                default_level
            ).into()
        });

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .init();
    }
}
