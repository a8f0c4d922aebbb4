//! Carousel collaborator boundary.
//!
//! The carousel widget itself is external. This module fixes what it is
//! handed: the ordered slide ids and one options set, opening on the most
//! recent slide. Options pass through untouched.

use crate::assemble::SlideSet;
use maud::{Markup, PreEscaped, html};
use serde::Serialize;
use tracing::debug;

/// Initialization options, serialized in the widget's camelCase naming.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
    pub initial_slide: usize,
    pub slide_class: &'static str,
    pub wrapper_class: &'static str,
    pub auto_height: bool,
    pub centered_slides: bool,
    pub grab_cursor: bool,
    pub next_button: &'static str,
    pub prev_button: &'static str,
    pub keyboard_control: bool,
    pub unique_nav_elements: bool,
    pub preload_images: bool,
    pub update_on_images_ready: bool,
}

impl CarouselOptions {
    /// The fixed option set, opening on `initial_slide`.
    pub fn opening_on(initial_slide: usize) -> Self {
        Self {
            initial_slide,
            slide_class: "l-post",
            wrapper_class: "art-slider__inner",
            auto_height: true,
            centered_slides: true,
            grab_cursor: true,
            next_button: ".nav-next",
            prev_button: ".nav-prev",
            keyboard_control: true,
            unique_nav_elements: false,
            preload_images: true,
            update_on_images_ready: true,
        }
    }
}

pub trait Carousel {
    fn init(&mut self, slide_ids: &[String], options: &CarouselOptions);
}

/// Initialize `carousel` with the slide set, opened on the most recent slide.
///
/// An empty set leaves the carousel uninitialized and returns `false`.
pub fn bootstrap<C: Carousel + ?Sized>(carousel: &mut C, set: &SlideSet) -> bool {
    let Some(initial) = set.active_index() else {
        debug!("no slides, carousel not initialized");
        return false;
    };
    let options = CarouselOptions::opening_on(initial);
    carousel.init(&set.ids(), &options);
    true
}

/// Carousel adapter that emits the widget's bootstrap `<script>`.
#[derive(Debug, Default)]
pub struct ScriptCarousel {
    script: Option<String>,
}

impl ScriptCarousel {
    pub const CONTAINER: &'static str = "#js-art-slider";

    /// Re-evaluates `srcset` on images the widget cloned, when the polyfill
    /// is present on the page.
    const PICTUREFILL: &'static str = "if (window.picturefill) { window.picturefill(); }";

    pub fn new() -> Self {
        Self::default()
    }

    /// The `<script>` block, or nothing if `init` was never called.
    pub fn render(&self) -> Markup {
        html! {
            @if let Some(script) = &self.script {
                script { (PreEscaped(script)) }
            }
        }
    }
}

impl Carousel for ScriptCarousel {
    fn init(&mut self, _slide_ids: &[String], options: &CarouselOptions) {
        let json = serde_json::to_string(options).expect("carousel options must serialize");
        self.script = Some(format!(
            "var artSlider = new Swiper('{}', {});\n{}",
            Self::CONTAINER,
            json,
            Self::PICTUREFILL
        ));
    }
}
