use super::MailError;
use crate::models::ContactRequest;
use askama::Template;

#[derive(Template)]
#[template(path = "email/contact.html")]
pub struct ContactEmail<'a> {
    pub request: &'a ContactRequest,
    pub sender_name: &'a str,
}

impl<'a> ContactEmail<'a> {
    fn preferred_date(&self) -> String {
        match self.request.preferred_date() {
            Some(date) => date.format("%A %-d %B %Y").to_string(),
            None => self.request.date.clone(),
        }
    }
}

pub fn render_contact_email(request: &ContactRequest, sender_name: &str) -> Result<String, MailError> {
    ContactEmail { request, sender_name }
        .render()
        .map_err(|e| MailError::Template(e.to_string()))
}
