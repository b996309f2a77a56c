use crate::{
    client::{ClientError, ContactApi, ContactResponse},
    error::Result,
    mail::ContactRelay,
    models::{ContactFormData, ContactRequest, ContactSubmission},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub const ACCEPTED_MESSAGE: &str = "Thanks, we have got your details, we will get back to you soon";

/// Accepts contact submissions and, when a relay is attached, forwards them.
#[derive(Clone)]
pub struct ContactService {
    relay: Option<Arc<dyn ContactRelay>>,
    subject: String,
}

impl ContactService {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            relay: None,
            subject: subject.into(),
        }
    }

    pub fn with_relay(mut self, relay: Arc<dyn ContactRelay>) -> Self {
        self.relay = Some(relay);
        self
    }

    pub fn is_relay_enabled(&self) -> bool {
        self.relay.is_some()
    }

    /// Re-checks required fields regardless of what the form already did, then
    /// awaits the relay. Without a relay the submission is accepted undelivered.
    pub async fn submit(&self, form: ContactFormData) -> Result<ContactRequest> {
        let request = form.into_request()?;

        match &self.relay {
            Some(relay) => {
                relay.relay(&self.subject, &request).await?;
                info!(vehicle = %request.vehicle, date = %request.date, "Contact submission relayed");
            }
            None => {
                info!(vehicle = %request.vehicle, date = %request.date, "Contact submission accepted, email relay disabled");
            }
        }

        Ok(request)
    }
}

#[async_trait]
impl ContactApi for ContactService {
    async fn send(&self, submission: &ContactSubmission) -> std::result::Result<ContactResponse, ClientError> {
        match self.submit(submission.form_data.clone()).await {
            Ok(_) => Ok(ContactResponse::accepted(ACCEPTED_MESSAGE)),
            Err(e) => {
                e.log();
                Ok(ContactResponse::rejected(e.public_message()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{AppError, GENERIC_FAILURE_MESSAGE},
        mail::MailError,
        models::contact::REQUIRED_FIELDS_MESSAGE,
    };
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRelay {
        calls: Mutex<Vec<(String, ContactRequest)>>,
        fail: bool,
    }

    #[async_trait]
    impl ContactRelay for RecordingRelay {
        async fn relay(&self, subject: &str, request: &ContactRequest) -> std::result::Result<(), MailError> {
            self.calls
                .lock()
                .unwrap()
                .push((subject.to_string(), request.clone()));
            if self.fail {
                return Err(MailError::Smtp("connection reset by smtp.gmail.com".to_string()));
            }
            Ok(())
        }
    }

    fn form() -> ContactFormData {
        ContactFormData::new("Jo", "+447000000000", "Golf R", "2025-01-10")
    }

    #[tokio::test]
    async fn test_disabled_relay_still_accepts() {
        let service = ContactService::new("Contact Form Submission");
        assert!(!service.is_relay_enabled());

        let request = service.submit(form()).await.unwrap();
        assert_eq!(request.name, "Jo");
    }

    #[tokio::test]
    async fn test_enabled_relay_is_called_once() {
        let relay = Arc::new(RecordingRelay::default());
        let service = ContactService::new("Contact Form Submission").with_relay(relay.clone());

        service.submit(form().with_additional("Ceramic")).await.unwrap();

        let calls = relay.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Contact Form Submission");
        assert_eq!(calls[0].1.vehicle, "Golf R");
        assert_eq!(calls[0].1.additional.as_deref(), Some("Ceramic"));
    }

    #[tokio::test]
    async fn test_missing_field_skips_relay() {
        let relay = Arc::new(RecordingRelay::default());
        let service = ContactService::new("Contact Form Submission").with_relay(relay.clone());

        let mut incomplete = form();
        incomplete.phone.clear();

        let result = service.submit(incomplete).await;
        assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == REQUIRED_FIELDS_MESSAGE));
        assert!(relay.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_relay_failure_surfaces_as_relay_error() {
        let relay = Arc::new(RecordingRelay {
            fail: true,
            ..RecordingRelay::default()
        });
        let service = ContactService::new("Contact Form Submission").with_relay(relay);

        let result = service.submit(form()).await;
        assert!(matches!(result, Err(AppError::Relay(_))));
    }

    #[tokio::test]
    async fn test_in_process_api_maps_outcomes() {
        let service = ContactService::new("Contact Form Submission");
        let accepted = service.send(&ContactSubmission::from(form())).await.unwrap();
        assert_eq!(accepted, ContactResponse::accepted(ACCEPTED_MESSAGE));

        let rejected = service.send(&ContactSubmission::default()).await.unwrap();
        assert_eq!(rejected, ContactResponse::rejected(REQUIRED_FIELDS_MESSAGE));

        let failing = ContactService::new("Contact Form Submission").with_relay(Arc::new(RecordingRelay {
            fail: true,
            ..RecordingRelay::default()
        }));
        let failed = failing.send(&ContactSubmission::from(form())).await.unwrap();
        assert_eq!(failed, ContactResponse::rejected(GENERIC_FAILURE_MESSAGE));
    }
}
