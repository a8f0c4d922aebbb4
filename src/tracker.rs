//! Active-slide height synchronization.
//!
//! The carousel preloads every slide, so image loads finish in any order.
//! Each slide owns a [`SlideTracker`]; when its image reports ready the
//! tracker compares its own key with the shared `current_page`. Only the
//! active slide writes, which keeps off-screen loads from making the visible
//! height flap.
//!
//! ```text
//! Unloaded ──media ready──▶ Loaded { active: true }   records + writes height
//!          └─media ready──▶ Loaded { active: false }  no writes
//! ```
//!
//! `Loaded` is terminal but re-enterable: a later load event (navigation back
//! to the slide, image reload) runs the transition again against whatever
//! `current_page` is at that moment.

use crate::state::{ViewStateRead, ViewStateWrite};
use crate::types::DateKey;
use tracing::{debug, trace};

/// Whether a slide's load may publish its height.
pub fn should_propagate(slide_id: &DateKey, current_page: &DateKey) -> bool {
    slide_id == current_page
}

/// "Media ready" signal from a slide: its image finished loading and the
/// container measured `measured_height` (the parent's scroll height).
#[derive(Debug, Clone, PartialEq)]
pub struct MediaReady {
    pub slide_id: DateKey,
    pub measured_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerStatus {
    Unloaded,
    Loaded { active: bool },
}

/// What a single load event did to the shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadOutcome {
    /// Slide was active: recorded as loaded and height published.
    Published { height: f64 },
    /// Slide was off-screen: nothing written.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideTracker {
    id: DateKey,
    status: TrackerStatus,
}

impl SlideTracker {
    pub fn new(id: DateKey) -> Self {
        Self {
            id,
            status: TrackerStatus::Unloaded,
        }
    }

    pub fn id(&self) -> &DateKey {
        &self.id
    }

    pub fn status(&self) -> TrackerStatus {
        self.status
    }

    /// The slide was re-bound to another date. Earlier, ignored events have no
    /// bearing on the next one.
    pub fn set_id(&mut self, id: DateKey) {
        if id != self.id {
            self.id = id;
            self.status = TrackerStatus::Unloaded;
        }
    }

    /// Handle this slide's image load.
    pub fn on_media_ready<S>(&mut self, measured_height: f64, state: &mut S) -> LoadOutcome
    where
        S: ViewStateRead + ViewStateWrite,
    {
        let active = should_propagate(&self.id, state.current_page());
        self.status = TrackerStatus::Loaded { active };

        if !active {
            trace!(slide = %self.id, current = %state.current_page(), "background load ignored");
            return LoadOutcome::Ignored;
        }

        state.record_slide_loaded(self.id.clone());
        state.set_current_artwork_height(measured_height);
        debug!(slide = %self.id, height = measured_height, "active slide height published");
        LoadOutcome::Published {
            height: measured_height,
        }
    }
}

/// Route a [`MediaReady`] event to the tracker it belongs to.
///
/// Returns `None` when no tracker carries the event's id (stale event from a
/// torn-down slide).
pub fn dispatch<S>(
    trackers: &mut [SlideTracker],
    event: &MediaReady,
    state: &mut S,
) -> Option<LoadOutcome>
where
    S: ViewStateRead + ViewStateWrite,
{
    let tracker = trackers.iter_mut().find(|t| t.id == event.slide_id)?;
    Some(tracker.on_media_ready(event.measured_height, state))
}
