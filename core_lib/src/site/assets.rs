//! Fixed manifest of public files and how to load them

use super::content::GALLERY_PATHS;
use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const STATIC_PATHS: &[&str] = &[
    "/images/ehd-logo.png",
    "/images/ehd-logo.jpg",
    "/images/hero-gwagen.jpg",
    "/icons/whatsapp.svg",
    "/icons/phone.svg",
    "/icons/email.svg",
];

#[derive(Debug, Clone)]
pub struct Asset {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct AssetManifest {
    public_dir: PathBuf,
}

impl AssetManifest {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
        }
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// Only listed paths are ever served, so request paths never reach the
    /// filesystem unchecked.
    pub fn contains(&self, request_path: &str) -> bool {
        STATIC_PATHS.contains(&request_path) || GALLERY_PATHS.contains(&request_path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> {
        STATIC_PATHS.iter().chain(GALLERY_PATHS.iter()).copied()
    }

    pub async fn load(&self, request_path: &str) -> Result<Asset> {
        if !self.contains(request_path) {
            return Err(AppError::NotFound(format!("Asset '{}' not found", request_path)));
        }

        let file_path = self.public_dir.join(request_path.trim_start_matches('/'));
        let bytes = match tokio::fs::read(&file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %file_path.display(), "Listed asset missing on disk");
                return Err(AppError::NotFound(format!("Asset '{}' not found", request_path)));
            }
            Err(e) => return Err(e.into()),
        };

        let content_type = mime_guess::from_path(&file_path)
            .first_or_octet_stream()
            .to_string();

        Ok(Asset {
            content_type,
            bytes,
        })
    }
}
