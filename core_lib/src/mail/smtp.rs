use super::{render_contact_email, ContactRelay, MailError};
use crate::{config::EmailConfig, models::ContactRequest};
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{debug, info};

/// STARTTLS relay authenticated with the sender's app password.
#[derive(Clone)]
pub struct SmtpRelay {
    config: EmailConfig,
    sender: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpRelay {
    pub fn new(config: EmailConfig) -> Result<Self, MailError> {
        let sender_address = non_blank(&config.sender_address)
            .ok_or(MailError::MissingConfig("sender email address"))?;
        let password = non_blank(&config.app_password)
            .ok_or(MailError::MissingConfig("sender app password"))?;

        let sender = Mailbox::new(Some(config.sender_name.clone()), parse_address(sender_address)?);

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .port(config.smtp_port)
            .credentials(Credentials::new(sender_address.to_string(), password.to_string()))
            .build();

        debug!(
            host = %config.smtp_host,
            port = config.smtp_port,
            "SMTP relay configured"
        );

        Ok(Self {
            config,
            sender,
            transport,
        })
    }

    pub fn build_message(&self, subject: &str, request: &ContactRequest) -> Result<Message, MailError> {
        let receivers = self.config.receivers();
        if receivers.is_empty() {
            return Err(MailError::MissingConfig("receiver email address"));
        }

        let mut builder = Message::builder()
            .from(self.sender.clone())
            .subject(subject)
            .header(ContentType::TEXT_HTML);

        for receiver in &receivers {
            builder = builder.to(Mailbox::new(None, parse_address(receiver)?));
        }

        let body = render_contact_email(request, &self.config.sender_name)?;

        builder.body(body).map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl ContactRelay for SmtpRelay {
    async fn relay(&self, subject: &str, request: &ContactRequest) -> Result<(), MailError> {
        let message = self.build_message(subject, request)?;
        let recipients = message.envelope().to().len();

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        info!(recipients, "Contact email relayed");
        Ok(())
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_address(raw: &str) -> Result<Address, MailError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|_| MailError::InvalidAddress(raw.to_string()))
}
