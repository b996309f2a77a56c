//! Relaying contact submissions by email.
//!
//! [`ContactRelay`] is the seam the contact service talks to. [`SmtpRelay`]
//! is the production implementation on top of lettre; tests supply their own.

mod smtp;
mod template;

pub use smtp::SmtpRelay;
pub use template::{render_contact_email, ContactEmail};

use crate::models::ContactRequest;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("missing required config: {0}")]
    MissingConfig(&'static str),

    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("failed to render email body: {0}")]
    Template(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// Delivers one submission. Resolves once the transport has accepted or
    /// rejected the message.
    async fn relay(&self, subject: &str, request: &ContactRequest) -> Result<(), MailError>;
}
