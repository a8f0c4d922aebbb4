//! Shared test utilities for the art-slider test suite.
//!
//! Fixture builders plus recording doubles for the three collaborator seams:
//! transport, carousel and view state.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let transport = StaticTransport::ok(r#"{"total": 1, "posts": {}}"#);
//! let mut state = RecordingState::new(key("01-01"), 0.0);
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

use crate::carousel::{Carousel, CarouselOptions};
use crate::state::{ViewStateRead, ViewStateWrite};
use crate::transport::{Transport, TransportError};
use crate::types::{Artwork, DateKey, ImageWidths};

// =========================================================================
// Fixtures
// =========================================================================

pub fn anchor_2014_03_04() -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 3, 4).unwrap()
}

/// Parse a `MM-DD` key. Panics on a malformed literal.
pub fn key(s: &str) -> DateKey {
    DateKey::parse(s).unwrap_or_else(|| panic!("bad test key '{s}'"))
}

pub fn posts(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn mock_artwork() -> Artwork {
    let url = |bp: &str| Some(format!("art/01-01-{bp}.jpg"));
    Artwork {
        title: Some("Morning Light".into()),
        artist: Some("A. Painter".into()),
        medium: Some("Oil on canvas".into()),
        year: None,
        alt: None,
        sm: url("sm"),
        md: url("md"),
        lg: url("lg"),
        xl: url("xl"),
        xl2: url("xl2"),
        xl3: url("xl3"),
    }
}

// =========================================================================
// Transport double
// =========================================================================

/// Answers requests with canned responses in order, then status 503 once they
/// run out. Records every requested path.
pub struct StaticTransport {
    responses: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
    requests: Mutex<Vec<String>>,
}

impl StaticTransport {
    pub fn ok(body: &str) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from([Ok(body.as_bytes().to_vec())])),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from([Err(error)])),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue another successful response after the existing ones.
    pub fn then_ok(self, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.as_bytes().to_vec()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn fetch_json(&self, path: &str) -> Result<Vec<u8>, TransportError> {
        self.requests.lock().unwrap().push(path.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::Status(503)))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

// =========================================================================
// Carousel double
// =========================================================================

#[derive(Default)]
pub struct RecordingCarousel {
    pub calls: Vec<(Vec<String>, CarouselOptions)>,
}

impl Carousel for RecordingCarousel {
    fn init(&mut self, slide_ids: &[String], options: &CarouselOptions) {
        self.calls.push((slide_ids.to_vec(), options.clone()));
    }
}

// =========================================================================
// View state double
// =========================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum StateWrite {
    SlideLoaded(DateKey),
    ArtworkHeight(f64),
}

/// View state that records every mutation in order.
pub struct RecordingState {
    pub current_page: DateKey,
    pub height: f64,
    pub loaded: Vec<DateKey>,
    pub writes: Vec<StateWrite>,
    pub widths: ImageWidths,
}

impl RecordingState {
    pub fn new(current_page: DateKey, height: f64) -> Self {
        Self {
            current_page,
            height,
            loaded: Vec::new(),
            writes: Vec::new(),
            widths: ImageWidths::default(),
        }
    }
}

impl ViewStateRead for RecordingState {
    fn current_page(&self) -> &DateKey {
        &self.current_page
    }

    fn current_artwork_height(&self) -> f64 {
        self.height
    }

    fn image_widths(&self) -> &ImageWidths {
        &self.widths
    }
}

impl ViewStateWrite for RecordingState {
    fn record_slide_loaded(&mut self, id: DateKey) {
        self.writes.push(StateWrite::SlideLoaded(id.clone()));
        self.loaded.push(id);
    }

    fn set_current_artwork_height(&mut self, height: f64) {
        self.writes.push(StateWrite::ArtworkHeight(height));
        self.height = height;
    }
}
