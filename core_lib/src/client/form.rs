use super::{ClientError, ContactApi, ContactResponse};
use crate::{
    models::{ContactFormData, ContactSubmission},
    validation::{Validatable, ValidationResult},
};
use tracing::{debug, warn};

pub const SUBMIT_LABEL: &str = "SEND";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUCCESS_FALLBACK_MESSAGE: &str = "Your message has been sent!";
pub const FAILURE_FALLBACK_MESSAGE: &str = "Failed to send message.";
pub const NETWORK_FAILURE_MESSAGE: &str = "Something went wrong. Try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid,
    AlreadySubmitting,
    Accepted,
    Rejected,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    values: ContactFormData,
    initial: ContactFormData,
    errors: ValidationResult,
    submitting: bool,
    status: Option<FormStatus>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Blank form with today's date preselected.
    pub fn new() -> Self {
        Self::with_initial(Self::blank())
    }

    pub fn with_initial(initial: ContactFormData) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: ValidationResult::success(),
            submitting: false,
            status: None,
        }
    }

    /// A form already filled in, resetting to the blank form on success.
    pub fn from_values(values: ContactFormData) -> Self {
        let mut form = Self::new();
        form.values = values;
        form
    }

    fn blank() -> ContactFormData {
        ContactFormData {
            date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            ..ContactFormData::default()
        }
    }

    pub fn values(&self) -> &ContactFormData {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut ContactFormData {
        &mut self.values
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.first_error(field)
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn validate(&mut self) -> bool {
        self.errors = self.values.validate_comprehensive();
        self.errors.is_valid
    }

    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors = ValidationResult::success();
    }

    /// Validates and flips the in-progress flag. The returned envelope is what
    /// goes over the wire.
    pub fn begin_submission(&mut self) -> Result<ContactSubmission, SubmitOutcome> {
        if self.submitting {
            return Err(SubmitOutcome::AlreadySubmitting);
        }

        if !self.validate() {
            debug!(fields = ?self.errors.errors.keys().collect::<Vec<_>>(), "Contact form failed local validation");
            return Err(SubmitOutcome::Invalid);
        }

        self.submitting = true;
        self.status = None;
        Ok(ContactSubmission::from(self.values.clone()))
    }

    pub fn finish_submission(&mut self, result: Result<ContactResponse, ClientError>) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(response) if response.success => {
                self.reset();
                self.status = Some(FormStatus::Success(message_or(
                    response.message,
                    SUCCESS_FALLBACK_MESSAGE,
                )));
                SubmitOutcome::Accepted
            }
            Ok(response) => {
                self.status = Some(FormStatus::Error(message_or(
                    response.message,
                    FAILURE_FALLBACK_MESSAGE,
                )));
                SubmitOutcome::Rejected
            }
            Err(e) => {
                warn!("Contact submission failed: {}", e);
                self.status = Some(FormStatus::Error(NETWORK_FAILURE_MESSAGE.to_string()));
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn submit<A>(&mut self, api: &A) -> SubmitOutcome
    where
        A: ContactApi + ?Sized,
    {
        let submission = match self.begin_submission() {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };

        let result = api.send(&submission).await;
        self.finish_submission(result)
    }
}

fn message_or(message: Option<String>, fallback: &str) -> String {
    match message {
        Some(message) if !message.trim().is_empty() => message,
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedApi {
        reply: Mutex<Option<Result<ContactResponse, ClientError>>>,
        sent: Mutex<Vec<ContactSubmission>>,
    }

    impl ScriptedApi {
        fn replying(reply: Result<ContactResponse, ClientError>) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<ContactSubmission> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContactApi for ScriptedApi {
        async fn send(&self, submission: &ContactSubmission) -> Result<ContactResponse, ClientError> {
            self.sent.lock().unwrap().push(submission.clone());
            self.reply
                .lock()
                .unwrap()
                .take()
                .expect("only one reply is scripted")
        }
    }

    fn filled() -> ContactForm {
        ContactForm::from_values(
            ContactFormData::new("Jo", "+447000000000", "Golf R", "2025-01-10")
                .with_additional("Pet hair"),
        )
    }

    #[test]
    fn test_new_form_defaults() {
        let form = ContactForm::new();
        assert_eq!(form.values().name, "");
        assert_eq!(form.values().date.len(), 10);
        assert!(form.status().is_none());
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_request() {
        let api = ScriptedApi::replying(Ok(ContactResponse::accepted("ok")));
        let mut form = ContactForm::with_initial(ContactFormData::default());

        assert_eq!(form.submit(&api).await, SubmitOutcome::Invalid);
        assert!(api.sent().is_empty());
        assert_eq!(form.field_error("name"), Some("Name is required"));
        assert_eq!(form.field_error("date"), Some("Preferred Date is required"));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_accepted_submission_clears_form() {
        let api = ScriptedApi::replying(Ok(ContactResponse::accepted(
            "Thanks, we have got your details, we will get back to you soon",
        )));
        let mut form = filled();

        assert_eq!(form.submit(&api).await, SubmitOutcome::Accepted);

        let sent = api.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].form_data.vehicle, "Golf R");
        assert_eq!(sent[0].form_data.additional, "Pet hair");

        assert_eq!(form.values().name, "");
        assert_eq!(form.values().additional, "");
        assert_eq!(
            form.status(),
            Some(&FormStatus::Success(
                "Thanks, we have got your details, we will get back to you soon".to_string()
            ))
        );
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_accepted_without_message_uses_fallback() {
        let api = ScriptedApi::replying(Ok(ContactResponse {
            success: true,
            message: None,
        }));
        let mut form = filled();

        form.submit(&api).await;
        assert_eq!(
            form.status(),
            Some(&FormStatus::Success(SUCCESS_FALLBACK_MESSAGE.to_string()))
        );
    }

    #[tokio::test]
    async fn test_rejected_submission_keeps_values() {
        let api = ScriptedApi::replying(Ok(ContactResponse::rejected(
            "Please fill all the required fields.",
        )));
        let mut form = filled();

        assert_eq!(form.submit(&api).await, SubmitOutcome::Rejected);
        assert_eq!(form.values().name, "Jo");
        assert_eq!(
            form.status(),
            Some(&FormStatus::Error("Please fill all the required fields.".to_string()))
        );
    }

    #[tokio::test]
    async fn test_rejected_with_blank_message_uses_fallback() {
        let api = ScriptedApi::replying(Ok(ContactResponse::rejected("")));
        let mut form = filled();

        form.submit(&api).await;
        assert_eq!(
            form.status(),
            Some(&FormStatus::Error(FAILURE_FALLBACK_MESSAGE.to_string()))
        );
    }

    #[tokio::test]
    async fn test_transport_failure_shows_generic_message() {
        let api = ScriptedApi::replying(Err(ClientError::InvalidResponse("status 502".to_string())));
        let mut form = filled();

        assert_eq!(form.submit(&api).await, SubmitOutcome::Failed);
        assert_eq!(form.values().vehicle, "Golf R");
        assert_eq!(
            form.status(),
            Some(&FormStatus::Error(NETWORK_FAILURE_MESSAGE.to_string()))
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_in_progress_flag_blocks_resubmission() {
        let mut form = filled();

        let submission = form.begin_submission().unwrap();
        assert_eq!(submission.form_data.name, "Jo");
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), SUBMITTING_LABEL);

        assert_eq!(form.begin_submission().unwrap_err(), SubmitOutcome::AlreadySubmitting);

        form.finish_submission(Ok(ContactResponse::accepted("done")));
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_new_submission_clears_previous_banner() {
        let mut form = filled();
        form.begin_submission().unwrap();
        form.finish_submission(Ok(ContactResponse::rejected("nope")));
        assert!(form.status().is_some());

        form.begin_submission().unwrap();
        assert!(form.status().is_none());
    }
}
