//! Contact form records: what the browser sends and what the server accepts

use crate::{
    error::AppError,
    validation::rules::{
        parse_calendar_date, validate_calendar_date, validate_phone_format, validate_required,
    },
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use validator::Validate;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill all the required fields.";

/// Request body of `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(rename = "formData", default)]
    pub form_data: ContactFormData,
}

/// The form exactly as typed. Absent and `null` fields read as empty strings so
/// that presence checks, not the JSON parser, decide what is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactFormData {
    #[serde(default, deserialize_with = "nullable_string")]
    #[validate(custom(function = "validate_required", message = "Name is required"))]
    pub name: String,

    #[serde(default, deserialize_with = "nullable_string")]
    #[validate(custom(function = "validate_required", message = "Phone Number is required"))]
    #[validate(custom(function = "validate_phone_format", message = "Please enter a valid phone number"))]
    pub phone: String,

    #[serde(default, deserialize_with = "nullable_string")]
    #[validate(custom(function = "validate_required", message = "Vehicle Make & Model is required"))]
    pub vehicle: String,

    #[serde(default, deserialize_with = "nullable_string")]
    #[validate(custom(function = "validate_required", message = "Preferred Date is required"))]
    #[validate(custom(function = "validate_calendar_date", message = "Preferred Date must be a valid date"))]
    pub date: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub additional: String,
}

/// A submission the server has accepted. The date is kept as submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub vehicle: String,
    pub date: String,
    pub additional: Option<String>,
}

impl ContactRequest {
    /// The calendar date, when the submitted text is `YYYY-MM-DD` or RFC 3339.
    pub fn preferred_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactRejection {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl ContactRejection {
    pub fn public_message(&self) -> &'static str {
        match self {
            ContactRejection::MissingFields(_) => REQUIRED_FIELDS_MESSAGE,
        }
    }
}

impl From<ContactRejection> for AppError {
    fn from(rejection: ContactRejection) -> Self {
        AppError::BadRequest(rejection.public_message().to_string())
    }
}

impl ContactFormData {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        vehicle: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            vehicle: vehicle.into(),
            date: date.into(),
            additional: String::new(),
        }
    }

    pub fn with_additional(mut self, additional: impl Into<String>) -> Self {
        self.additional = additional.into();
        self
    }

    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("vehicle", &self.vehicle),
            ("date", &self.date),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Server-side acceptance. Only presence is enforced; formatting rules
    /// stay on the form.
    pub fn into_request(self) -> Result<ContactRequest, ContactRejection> {
        let missing = self.missing_required_fields();
        if !missing.is_empty() {
            return Err(ContactRejection::MissingFields(missing));
        }

        let additional = self.additional.trim();

        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            vehicle: self.vehicle.trim().to_string(),
            date: self.date.trim().to_string(),
            additional: (!additional.is_empty()).then(|| additional.to_string()),
        })
    }
}

impl From<ContactFormData> for ContactSubmission {
    fn from(form_data: ContactFormData) -> Self {
        Self { form_data }
    }
}

/// Any JSON scalar a browser script might send for a form field.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl FieldValue {
    /// `false` and zero read as empty, like any other falsy value.
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Number(n) if n.as_f64() == Some(0.0) => String::new(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Flag(true) => "true".to_string(),
            FieldValue::Flag(false) => String::new(),
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FieldValue>::deserialize(deserializer)?
        .map(FieldValue::into_text)
        .unwrap_or_default())
}
