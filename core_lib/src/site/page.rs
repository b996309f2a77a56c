//! Server-rendered views

use super::{
    content::{GalleryImage, SiteContent},
    gallery::GalleryGrid,
};
use crate::{
    client::{ContactForm, FormStatus},
    error::{AppError, Result},
};
use askama::Template;
use chrono::Datelike;

pub const GALLERY_EXPANDED_HREF: &str = "/?gallery=all#gallery";
pub const GALLERY_COLLAPSED_HREF: &str = "/#gallery";

#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub required: bool,
}

impl FormField {
    pub fn is_multiline(&self) -> bool {
        self.input_type == "textarea"
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub content: &'a SiteContent,
    pub grid: &'a GalleryGrid,
    pub form: &'a ContactForm,
    pub year: i32,
}

impl<'a> IndexPage<'a> {
    pub fn new(content: &'a SiteContent, grid: &'a GalleryGrid, form: &'a ContactForm) -> Self {
        Self {
            content,
            grid,
            form,
            year: chrono::Local::now().year(),
        }
    }

    fn toggle_href(&self) -> &'static str {
        if self.grid.is_expanded() {
            GALLERY_COLLAPSED_HREF
        } else {
            GALLERY_EXPANDED_HREF
        }
    }

    fn success_message(&self) -> Option<&str> {
        match self.form.status() {
            Some(FormStatus::Success(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    fn error_message(&self) -> Option<&str> {
        match self.form.status() {
            Some(FormStatus::Error(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    fn form_fields(&self) -> Vec<FormField> {
        let values = self.form.values();
        let field = |name, label, input_type, value: &str, required| FormField {
            name,
            label,
            input_type,
            value: value.to_string(),
            error: self.form.field_error(name).map(str::to_string),
            required,
        };

        vec![
            field("name", "Name:", "text", &values.name, true),
            field("phone", "Phone Number:", "tel", &values.phone, true),
            field("vehicle", "Vehicle Make & Model:", "text", &values.vehicle, true),
            field("date", "Preferred Date:", "date", &values.date, true),
            field("additional", "Additional Info:", "textarea", &values.additional, false),
        ]
    }
}

#[derive(Template)]
#[template(path = "lightbox.html")]
pub struct LightboxPage<'a> {
    pub business_name: &'a str,
    pub image: &'a GalleryImage,
    pub position: usize,
    pub total: usize,
    pub previous_href: String,
    pub next_href: String,
    pub close_href: &'static str,
}

pub fn render_index(content: &SiteContent, grid: &GalleryGrid, form: &ContactForm) -> Result<String> {
    Ok(IndexPage::new(content, grid, form).render()?)
}

/// Renders the viewer for `index`, or `NotFound` when it is out of range.
pub fn render_lightbox(content: &SiteContent, grid: &GalleryGrid, index: usize) -> Result<String> {
    let mut lightbox = grid.lightbox();
    if !lightbox.open(index) {
        return Err(AppError::NotFound(format!("Gallery image {} not found", index)));
    }

    let page = LightboxPage {
        business_name: content.business_name,
        image: &grid.images()[lightbox.index()],
        position: lightbox.index() + 1,
        total: lightbox.len(),
        previous_href: format!("/gallery/{}", lightbox.previous_index()),
        next_href: format!("/gallery/{}", lightbox.next_index()),
        close_href: GALLERY_COLLAPSED_HREF,
    };

    Ok(page.render()?)
}
