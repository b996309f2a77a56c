//! Gallery grid and lightbox state.
//!
//! Both are plain state machines over a fixed, ordered image list. The page
//! renders them server side; the same types drive keyboard and swipe input.

use super::content::GalleryImage;
use serde::Serialize;

/// Horizontal travel, in CSS pixels, before a touch counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Tiles generated when no images are configured.
pub const PLACEHOLDER_COUNT: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl LightboxKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => LightboxKey::Escape,
            "ArrowLeft" | "Left" => LightboxKey::ArrowLeft,
            "ArrowRight" | "Right" => LightboxKey::ArrowRight,
            _ => LightboxKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Previous,
}

/// Wraps a possibly out-of-range index into `0..len`; an empty list yields 0.
pub fn wrap_index(index: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.rem_euclid(len as isize) as usize
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lightbox {
    len: usize,
    index: usize,
    open: bool,
    touch_start_x: Option<f64>,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            open: false,
            touch_start_x: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns false, leaving the state untouched, when `index` is out of range.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
        self.touch_start_x = None;
    }

    pub fn next_index(&self) -> usize {
        wrap_index(self.index as isize + 1, self.len)
    }

    pub fn previous_index(&self) -> usize {
        wrap_index(self.index as isize - 1, self.len)
    }

    pub fn next(&mut self) {
        self.index = self.next_index();
    }

    pub fn previous(&mut self) {
        self.index = self.previous_index();
    }

    /// Keys are ignored while closed. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.open {
            return false;
        }

        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::Other => return false,
        }
        true
    }

    pub fn touch_start(&mut self, x: f64) {
        if self.open {
            self.touch_start_x = Some(x);
        }
    }

    /// A leftward swipe advances, a rightward one goes back.
    pub fn touch_end(&mut self, x: f64) -> Option<Swipe> {
        let start = self.touch_start_x.take()?;
        if !self.open {
            return None;
        }

        let delta = start - x;
        if delta > SWIPE_THRESHOLD_PX {
            self.next();
            Some(Swipe::Next)
        } else if delta < -SWIPE_THRESHOLD_PX {
            self.previous();
            Some(Swipe::Previous)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryTile<'a> {
    pub index: usize,
    pub image: &'a GalleryImage,
    /// Set on the last visible tile while the grid is collapsed.
    pub more_label: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GalleryGrid {
    images: Vec<GalleryImage>,
    initial_visible: usize,
    show_all: bool,
}

impl GalleryGrid {
    pub fn new(images: Vec<GalleryImage>, initial_visible: usize) -> Self {
        let images = if images.is_empty() {
            placeholder_images(PLACEHOLDER_COUNT)
        } else {
            images
        };

        Self {
            images,
            initial_visible,
            show_all: false,
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn is_expanded(&self) -> bool {
        self.show_all
    }

    pub fn set_expanded(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    pub fn toggle(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn remaining(&self) -> usize {
        self.images.len().saturating_sub(self.initial_visible)
    }

    pub fn visible(&self) -> &[GalleryImage] {
        if self.show_all {
            &self.images
        } else {
            &self.images[..self.initial_visible.min(self.images.len())]
        }
    }

    pub fn tiles(&self) -> Vec<GalleryTile<'_>> {
        let remaining = self.remaining();
        self.visible()
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let collapsed_tail = !self.show_all && remaining > 0 && index + 1 == self.initial_visible;
                GalleryTile {
                    index,
                    image,
                    more_label: collapsed_tail.then(|| format!("+{} more photos", remaining)),
                }
            })
            .collect()
    }

    /// `None` when every image already fits in the collapsed grid.
    pub fn toggle_label(&self) -> Option<String> {
        if self.remaining() == 0 {
            return None;
        }

        Some(if self.show_all {
            "Show less".to_string()
        } else {
            format!("Show all ({})", self.images.len())
        })
    }

    pub fn lightbox(&self) -> Lightbox {
        Lightbox::new(self.images.len())
    }
}

pub fn placeholder_images(count: usize) -> Vec<GalleryImage> {
    (1..=count)
        .map(|i| {
            GalleryImage::new(
                format!(
                    "/placeholder.svg?height=480&width=720&query=car%20detailing%20closeup%20shot%20{}",
                    i
                ),
                format!("Detailing image {}", i),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<GalleryImage> {
        (0..n)
            .map(|i| GalleryImage::new(format!("/images/gallery/{}.jpg", i), format!("Image {}", i)))
            .collect()
    }

    #[test]
    fn test_wrap_index_at_both_ends() {
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(5, 5), 0);
        assert_eq!(wrap_index(2, 5), 2);
        assert_eq!(wrap_index(-6, 5), 4);
    }

    #[test]
    fn test_wrap_index_on_empty_list() {
        assert_eq!(wrap_index(0, 0), 0);
        assert_eq!(wrap_index(-1, 0), 0);
        assert_eq!(wrap_index(3, 0), 0);
    }

    #[test]
    fn test_open_and_close() {
        let mut lightbox = Lightbox::new(3);
        assert!(!lightbox.is_open());

        assert!(lightbox.open(2));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.index(), 2);

        lightbox.close();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.index(), 2);
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let mut lightbox = Lightbox::new(3);
        assert!(!lightbox.open(3));
        assert!(!lightbox.is_open());

        let mut empty = Lightbox::new(0);
        assert!(!empty.open(0));
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut lightbox = Lightbox::new(4);
        lightbox.open(3);
        lightbox.next();
        assert_eq!(lightbox.index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut lightbox = Lightbox::new(4);
        lightbox.open(0);
        lightbox.previous();
        assert_eq!(lightbox.index(), 3);
    }

    #[test]
    fn test_single_image_wraps_onto_itself() {
        let mut lightbox = Lightbox::new(1);
        lightbox.open(0);
        lightbox.next();
        assert_eq!(lightbox.index(), 0);
        lightbox.previous();
        assert_eq!(lightbox.index(), 0);
    }

    #[test]
    fn test_empty_lightbox_navigation_is_noop() {
        let mut lightbox = Lightbox::new(0);
        lightbox.next();
        lightbox.previous();
        assert_eq!(lightbox.index(), 0);
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut lightbox = Lightbox::new(5);
        assert!(!lightbox.handle_key(LightboxKey::ArrowRight));
        assert_eq!(lightbox.index(), 0);

        lightbox.open(1);
        assert!(lightbox.handle_key(LightboxKey::from_key("ArrowRight")));
        assert_eq!(lightbox.index(), 2);
        assert!(lightbox.handle_key(LightboxKey::from_key("ArrowLeft")));
        assert!(lightbox.handle_key(LightboxKey::from_key("ArrowLeft")));
        assert!(lightbox.handle_key(LightboxKey::from_key("ArrowLeft")));
        assert_eq!(lightbox.index(), 4);

        assert!(!lightbox.handle_key(LightboxKey::from_key("Enter")));
        assert!(lightbox.handle_key(LightboxKey::from_key("Escape")));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_swipe_left_advances() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(2);
        lightbox.touch_start(300.0);
        assert_eq!(lightbox.touch_end(200.0), Some(Swipe::Next));
        assert_eq!(lightbox.index(), 0);
    }

    #[test]
    fn test_swipe_right_goes_back() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(0);
        lightbox.touch_start(100.0);
        assert_eq!(lightbox.touch_end(180.0), Some(Swipe::Previous));
        assert_eq!(lightbox.index(), 2);
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(1);
        lightbox.touch_start(100.0);
        assert_eq!(lightbox.touch_end(60.0), None);
        lightbox.touch_start(100.0);
        assert_eq!(lightbox.touch_end(150.0), None);
        assert_eq!(lightbox.index(), 1);
    }

    #[test]
    fn test_touch_end_without_start_is_ignored() {
        let mut lightbox = Lightbox::new(3);
        lightbox.open(1);
        assert_eq!(lightbox.touch_end(0.0), None);

        lightbox.close();
        lightbox.touch_start(300.0);
        assert_eq!(lightbox.touch_end(0.0), None);
        assert_eq!(lightbox.index(), 1);
    }

    #[test]
    fn test_collapsed_grid_shows_initial_tiles() {
        let grid = GalleryGrid::new(images(14), 10);
        assert_eq!(grid.visible().len(), 10);
        assert_eq!(grid.remaining(), 4);

        let tiles = grid.tiles();
        assert_eq!(tiles.len(), 10);
        assert_eq!(tiles[9].more_label.as_deref(), Some("+4 more photos"));
        assert!(tiles[..9].iter().all(|tile| tile.more_label.is_none()));
        assert_eq!(grid.toggle_label().as_deref(), Some("Show all (14)"));
    }

    #[test]
    fn test_expanded_grid_shows_everything() {
        let mut grid = GalleryGrid::new(images(14), 10);
        grid.toggle();

        assert!(grid.is_expanded());
        assert_eq!(grid.visible().len(), 14);
        assert!(grid.tiles().iter().all(|tile| tile.more_label.is_none()));
        assert_eq!(grid.toggle_label().as_deref(), Some("Show less"));
    }

    #[test]
    fn test_small_grid_has_no_toggle() {
        let grid = GalleryGrid::new(images(6), 10);
        assert_eq!(grid.visible().len(), 6);
        assert_eq!(grid.remaining(), 0);
        assert!(grid.toggle_label().is_none());
        assert!(grid.tiles().iter().all(|tile| tile.more_label.is_none()));
    }

    #[test]
    fn test_empty_grid_falls_back_to_placeholders() {
        let grid = GalleryGrid::new(Vec::new(), 10);
        assert_eq!(grid.images().len(), PLACEHOLDER_COUNT);
        assert_eq!(grid.remaining(), PLACEHOLDER_COUNT - 10);
        assert!(grid.images()[0].src.starts_with("/placeholder.svg"));
        assert_eq!(grid.lightbox().len(), PLACEHOLDER_COUNT);
    }
}
