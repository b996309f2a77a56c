//! Contact form endpoints

use crate::{
    client::{ContactForm, ContactResponse},
    error::Result,
    extractors::ApiJson,
    models::{request::ApiResponse, ContactFormData, ContactSubmission},
    services::ACCEPTED_MESSAGE,
    site::render_index,
    AppState,
};
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use tracing::info;

pub async fn handle_contact_api(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<ContactSubmission>,
) -> Result<impl IntoResponse> {
    info!("POST /api/contact");

    state.contact_service.submit(submission.form_data).await?;

    Ok(Json(ApiResponse::<()>::success(ACCEPTED_MESSAGE)))
}

/// No-script fallback: the same flow as the browser form, answered with the
/// re-rendered page.
pub async fn handle_contact_form(
    State(state): State<AppState>,
    Form(values): Form<ContactFormData>,
) -> Result<impl IntoResponse> {
    info!("POST /contact");

    let mut form = ContactForm::from_values(values);
    let status = match form.begin_submission() {
        Ok(submission) => match state.contact_service.submit(submission.form_data).await {
            Ok(_) => {
                form.finish_submission(Ok(ContactResponse::accepted(ACCEPTED_MESSAGE)));
                StatusCode::OK
            }
            Err(e) => {
                e.log();
                let status = e.status_code();
                form.finish_submission(Ok(ContactResponse::rejected(e.public_message())));
                status
            }
        },
        Err(_) => StatusCode::BAD_REQUEST,
    };

    let grid = state.gallery_grid(false);
    let html = render_index(&state.site, &grid, &form)?;

    Ok((status, Html(html)))
}
