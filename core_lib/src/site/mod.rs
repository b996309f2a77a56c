//! Marketing site content, gallery behaviour and rendered pages

pub mod assets;
pub mod content;
pub mod gallery;
pub mod page;

pub use assets::{Asset, AssetManifest};
pub use content::{GalleryImage, SiteContent};
pub use gallery::{GalleryGrid, Lightbox, LightboxKey, Swipe};
pub use page::{render_index, render_lightbox};
