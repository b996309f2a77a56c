//! Application error types and handling

use crate::{mail::MailError, models::request::ApiResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Message returned for every 5xx; the cause only goes to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    InternalServerError,

    #[error("Relay error: {0}")]
    Relay(#[from] MailError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::JsonError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError
            | AppError::Relay(_)
            | AppError::Template(_)
            | AppError::IoError(_)
            | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text safe to show a visitor. Server-side causes never appear here.
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::JsonError(_) => "Invalid JSON data".to_string(),
            AppError::InternalServerError
            | AppError::Relay(_)
            | AppError::Template(_)
            | AppError::IoError(_)
            | AppError::Other(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn log(&self) {
        match self {
            AppError::BadRequest(msg) => tracing::debug!("Bad request: {}", msg),
            AppError::NotFound(msg) => tracing::debug!("Not found: {}", msg),
            AppError::InternalServerError => tracing::error!("Internal server error"),
            AppError::Relay(err) => tracing::error!("Contact relay failed: {}", err),
            AppError::Template(err) => tracing::error!("Template rendering failed: {:?}", err),
            AppError::IoError(err) => tracing::error!("IO error: {:?}", err),
            AppError::JsonError(err) => tracing::warn!("JSON error: {:?}", err),
            AppError::Other(err) => tracing::error!("Unexpected error: {:?}", err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(ApiResponse::<()>::error(self.public_message()));
        (self.status_code(), body).into_response()
    }
}
