//! Core library for the detailing site: content, gallery, contact form and
//! email relay, plus the route handlers the server binary mounts.

pub mod client;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mail;
pub mod middleware;
pub mod models;
pub mod services;
pub mod site;
pub mod validation;

pub use client::{ContactApi, ContactForm, HttpContactApi};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use mail::{ContactRelay, MailError, SmtpRelay};
pub use middleware::{cors_layer_from_config, logging_layer};
pub use services::ContactService;
pub use site::{AssetManifest, GalleryGrid, SiteContent};
pub use validation::{Validatable, ValidationResult};

use axum::Router;
use std::{net::SocketAddr, sync::Arc, time::Instant};
use tokio::signal;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub config: Arc<AppConfig>,
    pub site: Arc<SiteContent>,
    pub assets: AssetManifest,
    pub contact_service: ContactService,
    pub started_at: Instant,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    /// State with the relay detached; attach one with [`AppState::with_relay`].
    pub fn new(config: AppConfig) -> Self {
        let assets = AssetManifest::new(config.site.public_dir.clone());
        let contact_service = ContactService::new(config.email.subject.clone());
        let site = SiteContent::default();

        Self {
            app_name: site.business_name.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config: Arc::new(config),
            site: Arc::new(site),
            assets,
            contact_service,
            started_at: Instant::now(),
        }
    }

    pub fn with_relay(mut self, relay: Arc<dyn ContactRelay>) -> Self {
        self.contact_service = self.contact_service.with_relay(relay);
        self
    }

    pub fn with_site_content(mut self, site: SiteContent) -> Self {
        self.site = Arc::new(site);
        self
    }

    pub fn gallery_grid(&self, show_all: bool) -> GalleryGrid {
        let mut grid = GalleryGrid::new(
            self.site.gallery.clone(),
            self.config.site.gallery_initial_visible,
        );
        grid.set_expanded(show_all);
        grid
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(state.config.server.contact_body_limit_bytes))
        .layer(cors_layer_from_config(&state.config.cors))
        .layer(logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let app = app.into_make_service_with_connect_info::<SocketAddr>();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
