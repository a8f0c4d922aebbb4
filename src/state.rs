//! Shared view state for one gallery view.
//!
//! The state is an owned value handed explicitly to whoever needs it. Slide
//! trackers see it through two narrow capabilities:
//!
//! - [`ViewStateRead`]: current page, current height, image widths
//! - [`ViewStateWrite`]: record a loaded slide, set the artwork height
//!
//! The carousel is the only component that moves `current_page`, through
//! [`ViewState::set_current_page`].

use crate::types::{DateKey, ImageWidths};
use tracing::trace;

/// Read access to the shared view state.
pub trait ViewStateRead {
    fn current_page(&self) -> &DateKey;
    fn current_artwork_height(&self) -> f64;
    fn image_widths(&self) -> &ImageWidths;
}

/// The two mutation entry points exposed to slides.
pub trait ViewStateWrite {
    /// Append `id` to the loaded-slide list. Duplicates are kept.
    fn record_slide_loaded(&mut self, id: DateKey);
    /// Overwrite the visible artwork height.
    fn set_current_artwork_height(&mut self, height: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    current_page: DateKey,
    current_artwork_height: f64,
    loaded_slides: Vec<DateKey>,
    image_widths: ImageWidths,
}

impl ViewState {
    pub fn new(current_page: DateKey, image_widths: ImageWidths) -> Self {
        Self {
            current_page,
            current_artwork_height: 0.0,
            loaded_slides: Vec::new(),
            image_widths,
        }
    }

    /// Carousel navigation: make `page` the active slide.
    pub fn set_current_page(&mut self, page: DateKey) {
        trace!(from = %self.current_page, to = %page, "current page changed");
        self.current_page = page;
    }

    /// Every recorded load, in order, duplicates included.
    pub fn loaded_slides(&self) -> &[DateKey] {
        &self.loaded_slides
    }

    pub fn is_loaded(&self, id: &DateKey) -> bool {
        self.loaded_slides.contains(id)
    }
}

impl ViewStateRead for ViewState {
    fn current_page(&self) -> &DateKey {
        &self.current_page
    }

    fn current_artwork_height(&self) -> f64 {
        self.current_artwork_height
    }

    fn image_widths(&self) -> &ImageWidths {
        &self.image_widths
    }
}

impl ViewStateWrite for ViewState {
    fn record_slide_loaded(&mut self, id: DateKey) {
        self.loaded_slides.push(id);
    }

    fn set_current_artwork_height(&mut self, height: f64) {
        self.current_artwork_height = height;
    }
}
