//! Gallery HTML document.
//!
//! One page: the slider container holding every slide in order, the prev/next
//! controls and, when there is at least one slide, the carousel bootstrap
//! script. Styles are embedded at compile time from `static/style.css`.
//!
//! When the month has an artwork catalog, each slide leads with its image and
//! details list. A slide the catalog does not cover gets the empty placeholders.

use crate::artwork::{render_art_image, render_details_list};
use crate::assemble::{render_slide_with, render_slides};
use crate::carousel::{ScriptCarousel, bootstrap};
use crate::gallery::Gallery;
use crate::types::ImageWidths;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");

/// Path of the carousel widget script, relative to the page.
const CAROUSEL_JS: &str = "js/swiper.min.js";

fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}

fn render_gallery_slides(gallery: &Gallery, widths: &ImageWidths) -> Markup {
    if gallery.artwork.is_empty() {
        return render_slides(&gallery.slides);
    }
    html! {
        @for slide in &gallery.slides.slides {
            @let artwork = gallery.artwork.get(slide.date_key.as_str());
            (render_slide_with(slide, html! {
                (render_art_image(&slide.date_key, artwork, widths))
                (render_details_list(artwork))
            }))
        }
    }
}

/// Render the complete gallery page.
pub fn render_gallery_page(title: &str, gallery: &Gallery, widths: &ImageWidths) -> Markup {
    let mut carousel = ScriptCarousel::new();
    let initialized = bootstrap(&mut carousel, &gallery.slides);

    let content = html! {
        main id="js-art-slider" class="art-slider" {
            div id="js-art-slider__inner" class="art-slider__inner" {
                (render_gallery_slides(gallery, widths))
            }
            @if initialized {
                button.nav-prev type="button" aria-label="Previous day" { "‹" }
                button.nav-next type="button" aria-label="Next day" { "›" }
            } @else {
                p.art-slider--empty { "Nothing to show yet." }
            }
        }
        @if initialized {
            script src=(CAROUSEL_JS) {}
            (carousel.render())
        }
    };

    base_document(title, content)
}

/// Write `index.html` into `output_dir`, creating it if needed.
pub fn write_gallery(output_dir: &Path, page: &Markup) -> Result<PathBuf, PageError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("index.html");
    fs::write(&path, &page.0)?;
    Ok(path)
}
