//! Health check handlers

use crate::{models::request::ApiResponse, AppState};
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::with_data(
        "healthy",
        json!({
            "status": "healthy",
            "app": state.app_name,
            "version": state.version,
            "uptime_seconds": state.uptime_seconds(),
            "email_enabled": state.contact_service.is_relay_enabled(),
            "timestamp": chrono::Utc::now().timestamp(),
        }),
    ))
}

/// The relay is optional, so a running process is always ready to accept forms.
pub async fn handle_ready(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::with_data(
        "ready",
        json!({
            "status": "ready",
            "email_enabled": state.contact_service.is_relay_enabled(),
        }),
    ))
}

pub async fn handle_live() -> impl IntoResponse {
    Json(ApiResponse::with_data(
        "alive",
        json!({
            "status": "alive",
            "timestamp": chrono::Utc::now().timestamp(),
        }),
    ))
}
