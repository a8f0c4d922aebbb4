//! Artwork presentation for a single slide.
//!
//! Upstream artwork records are inconsistent: any breakpoint URL may be null
//! and a lookup for a slide may find nothing at all. Both renderers degrade to
//! an empty placeholder instead of failing.

use crate::types::{Artwork, DateKey, ImageWidths};
use maud::{Markup, html};

/// `srcset` from every breakpoint that has a URL, smallest first.
pub fn build_srcset(artwork: &Artwork, widths: &ImageWidths) -> String {
    widths
        .breakpoints()
        .iter()
        .filter_map(|(name, width)| artwork.url_for(name).map(|url| format!("{url} {width}w")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fallback `src`: the smallest available breakpoint.
fn fallback_src<'a>(artwork: &'a Artwork, widths: &ImageWidths) -> Option<&'a str> {
    widths
        .breakpoints()
        .iter()
        .find_map(|(name, _)| artwork.url_for(name))
}

/// The slide's lazily loaded image. The `img` carries the slide key so the
/// load handler can raise a media-ready event for the right tracker.
pub fn render_art_image(slide: &DateKey, artwork: Option<&Artwork>, widths: &ImageWidths) -> Markup {
    let Some(artwork) = artwork else {
        return html! { div class="art-image art-image--empty" data-slide=(slide.as_str()) {} };
    };
    let Some(src) = fallback_src(artwork, widths) else {
        return html! { div class="art-image art-image--empty" data-slide=(slide.as_str()) {} };
    };
    let srcset = build_srcset(artwork, widths);
    let alt = artwork
        .alt
        .as_deref()
        .or(artwork.title.as_deref())
        .unwrap_or("");

    html! {
        div.art-image data-slide=(slide.as_str()) {
            img.art-image__img src=(src) srcset=(srcset) sizes="100vw" alt=(alt) loading="lazy";
        }
    }
}

/// Title/artist/medium/year list. Missing fields are skipped; a missing
/// artwork renders an empty list.
pub fn render_details_list(artwork: Option<&Artwork>) -> Markup {
    let Some(artwork) = artwork else {
        return html! { dl class="details-list details-list--empty" {} };
    };
    let rows = [
        ("Title", artwork.title.as_deref()),
        ("Artist", artwork.artist.as_deref()),
        ("Medium", artwork.medium.as_deref()),
        ("Year", artwork.year.as_deref()),
    ];

    html! {
        dl.details-list {
            @for (label, value) in rows {
                @if let Some(value) = value {
                    dt { (label) }
                    dd { (value) }
                }
            }
        }
    }
}
