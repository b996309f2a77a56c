//! Field rules shared by the contact form and the server

use chrono::{DateTime, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // Digits with the usual separators, optional leading '+' or area-code
    // bracket, 6 to 20 chars.
    static ref PHONE_REGEX: Regex = Regex::new(
        r"^\+?[0-9(][0-9 ()\-]{5,19}$"
    ).unwrap();
}

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

/// Blank input passes; `validate_required` reports that case.
pub fn validate_phone_format(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Ok(());
    }

    if !PHONE_REGEX.is_match(phone) {
        return Err(ValidationError::new("phone_format"));
    }

    Ok(())
}

/// Blank input passes; `validate_required` reports that case.
pub fn validate_calendar_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }

    match parse_calendar_date(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("calendar_date")),
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp and keeps its calendar date.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}
