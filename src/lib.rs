//! # Art Slider
//!
//! A date-paginated artwork gallery: one slide per day, browsed in a carousel
//! that opens on today. The crate is the orchestration between "today's date",
//! a month archive in JSON and an externally provided carousel widget.
//!
//! # Pipeline
//!
//! ```text
//! anchor date ──▶ /{namespace}/{MM}-slides.json ──▶ slide set ──▶ carousel
//!  (dates)              (archive, transport)        (assemble)    (carousel)
//!
//! image loads ──▶ MediaReady ──▶ SlideTracker gate ──▶ ViewState height
//!                                   (tracker)             (state)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dates`] | Backward date window, `MM-DD` / `MM` formatting, anchor resolution |
//! | [`types`] | `DateKey`, `SlideRecord`, `ArchivePayload`, `Artwork`, `ImageWidths` |
//! | [`transport`] | `Transport` trait, HTTP and file adapters, startup selection |
//! | [`archive`] | One-shot month archive fetch with a success-only callback; artwork catalog fetch |
//! | [`assemble`] | Slide set construction (oldest first) and slide markup |
//! | [`carousel`] | Carousel collaborator trait and its fixed init options |
//! | [`state`] | Owned shared view state with read/write capabilities |
//! | [`tracker`] | Per-slide load handling, gated to the active slide |
//! | [`artwork`] | Responsive artwork image and details, degraded when data is missing |
//! | [`gallery`] | Anchor → archive → slide set, plus the month's artwork catalog |
//! | [`page`] | Gallery HTML document |
//! | [`config`] | `gallery.toml` loading, merging, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Only the Active Slide Writes
//!
//! The carousel preloads every image, so load events arrive in any order. A
//! slide publishes its measured height only when its key equals the view's
//! `current_page` ([`tracker::should_propagate`]). Background loads change
//! nothing, so the visible height never flaps to an off-screen slide.
//!
//! ## Explicit State
//!
//! [`state::ViewState`] is owned by the host and passed into each handler.
//! Trackers see it through [`state::ViewStateRead`] and
//! [`state::ViewStateWrite`] only.
//!
//! ## Fail Silent
//!
//! A failed archive fetch leaves the gallery empty. There is no retry and no
//! error surface; the failure is logged with `tracing` and that is all.
//!
//! ## Transport Chosen Once
//!
//! [`transport::select_transport`] walks the configured order at startup and
//! keeps the first adapter it can build.

pub mod archive;
pub mod artwork;
pub mod assemble;
pub mod carousel;
pub mod config;
pub mod dates;
pub mod gallery;
pub mod output;
pub mod page;
pub mod state;
pub mod tracker;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
