//! Page, lightbox and static asset handlers

use crate::{
    client::ContactForm,
    error::{AppError, Result},
    site::{render_index, render_lightbox},
    AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, Uri},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use tracing::debug;

const ASSET_CACHE_CONTROL: &str = "public, max-age=86400";

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    gallery: Option<String>,
}

impl PageQuery {
    fn show_all(&self) -> bool {
        self.gallery.as_deref() == Some("all")
    }
}

pub async fn handle_index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let grid = state.gallery_grid(query.show_all());
    let html = render_index(&state.site, &grid, &ContactForm::new())?;
    Ok(Html(html))
}

pub async fn handle_lightbox(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<impl IntoResponse> {
    let index: usize = index
        .parse()
        .map_err(|_| AppError::NotFound(format!("Gallery image '{}' not found", index)))?;

    let grid = state.gallery_grid(true);
    Ok(Html(render_lightbox(&state.site, &grid, index)?))
}

pub async fn handle_asset(State(state): State<AppState>, uri: Uri) -> Result<impl IntoResponse> {
    debug!("GET {}", uri.path());

    let asset = state.assets.load(uri.path()).await?;

    Ok((
        [
            (header::CONTENT_TYPE, asset.content_type),
            (header::CACHE_CONTROL, ASSET_CACHE_CONTROL.to_string()),
        ],
        asset.bytes,
    ))
}

pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
