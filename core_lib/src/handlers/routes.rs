//! Route table

use super::{
    contact::{handle_contact_api, handle_contact_form},
    health::{handle_health, handle_live, handle_ready},
    site::{handle_asset, handle_index, handle_lightbox, handle_not_found},
};
use crate::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub fn create_routes(contact_body_limit: usize) -> Router<AppState> {
    let contact = Router::new()
        .route("/api/contact", post(handle_contact_api))
        .route("/contact", post(handle_contact_form))
        .layer(DefaultBodyLimit::max(contact_body_limit));

    Router::new()
        .route("/", get(handle_index))
        .route("/gallery/:index", get(handle_lightbox))
        .route("/images/*path", get(handle_asset))
        .route("/icons/*path", get(handle_asset))
        .route("/health", get(handle_health))
        .route("/ready", get(handle_ready))
        .route("/live", get(handle_live))
        .merge(contact)
        .fallback(handle_not_found)
}
