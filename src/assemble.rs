//! Slide-set construction.
//!
//! Walks the date window backward from the anchor and builds one slide per
//! day. Each new (older) slide is prepended, so the finished set reads oldest
//! first with the anchor day last. The carousel opens on that last slide.
//!
//! ```text
//! anchor 2014-03-04, total 3
//!   generated:  03-04, 03-03, 03-02
//!   assembled:  03-02, 03-03, 03-04   ← active
//! ```
//!
//! A date key names exactly one slide, so the window never spans more than
//! [`MAX_WINDOW_DAYS`] and stops early if a key would repeat (a 366-day
//! window without a Feb 29 wraps onto its first key).

use crate::dates::window_keys;
use crate::types::{DateKey, SlideRecord};
use chrono::NaiveDate;
use maud::{Markup, PreEscaped, html};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use tracing::{debug, warn};

/// Most distinct `MM-DD` keys a backward window can hold.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Ordered slides plus the id the carousel should open on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideSet {
    pub slides: Vec<SlideRecord>,
    /// Id of the most recent slide, `None` for an empty set.
    pub active_id: Option<String>,
}

impl SlideSet {
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Index of the active (most recent) slide.
    pub fn active_index(&self) -> Option<usize> {
        self.slides.len().checked_sub(1)
    }

    pub fn ids(&self) -> Vec<String> {
        self.slides.iter().map(|s| s.id.clone()).collect()
    }

    pub fn active_key(&self) -> Option<&DateKey> {
        self.slides.last().map(|s| &s.date_key)
    }
}

/// Build the slide set for `total` days ending at `anchor`.
///
/// Dates with no entry in `posts` still get a slide, with empty markup.
/// `total` comes from the archive and is capped to the unique-key window.
pub fn assemble_slides(
    anchor: NaiveDate,
    total: u32,
    posts: &BTreeMap<String, String>,
) -> SlideSet {
    let days = total.min(MAX_WINDOW_DAYS);
    if days < total {
        warn!(total, max = MAX_WINDOW_DAYS, "archive total exceeds window, capped");
    }

    let mut slides = VecDeque::new();
    let mut seen = BTreeSet::new();

    for key in window_keys(anchor, days) {
        if !seen.insert(key.clone()) {
            warn!(date = %key, slides = slides.len(), "date key repeats, window stops");
            break;
        }
        let markup = match posts.get(key.as_str()) {
            Some(markup) => markup.clone(),
            None => {
                debug!(date = %key, "no archive entry, slide left empty");
                String::new()
            }
        };
        slides.push_front(SlideRecord {
            id: key.slide_id(),
            date_key: key,
            markup,
        });
    }

    let slides: Vec<SlideRecord> = slides.into();
    let active_id = slides.last().map(|s| s.id.clone());
    SlideSet { slides, active_id }
}

/// Render one slide wrapper. Archive markup is trusted HTML and inserted as-is.
pub fn render_slide(slide: &SlideRecord) -> Markup {
    render_slide_with(slide, html! {})
}

/// Slide wrapper with `lead` placed before the archive markup.
pub fn render_slide_with(slide: &SlideRecord, lead: Markup) -> Markup {
    html! {
        div id=(slide.id) class={ "l-post " (slide.id) " swiper-slide" } data-hash=(slide.date_key.as_str()) {
            (lead)
            (PreEscaped(&slide.markup))
        }
    }
}

/// Concatenated markup for the whole set, in slide order.
pub fn render_slides(set: &SlideSet) -> Markup {
    html! {
        @for slide in &set.slides {
            (render_slide(slide))
        }
    }
}
