//! Browser-side submission flow.
//!
//! [`ContactForm`] holds what the visitor typed, local validation results, the
//! in-progress flag and the banner shown after a submission. It talks to the
//! server through [`ContactApi`]; [`HttpContactApi`] is the network-backed
//! implementation.

mod form;
mod http;

pub use form::{
    ContactForm, FormStatus, SubmitOutcome, FAILURE_FALLBACK_MESSAGE, NETWORK_FAILURE_MESSAGE,
    SUBMITTING_LABEL, SUBMIT_LABEL, SUCCESS_FALLBACK_MESSAGE,
};
pub use http::HttpContactApi;

use crate::models::ContactSubmission;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the form reads back from the server. Both members are optional on
/// the wire; a missing `success` counts as failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<ContactResponse, ClientError>;
}
