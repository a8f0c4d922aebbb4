//! Shared types used across the slide pipeline.
//!
//! The archive payload is deserialized straight from the month JSON document;
//! everything else is built by the assembler or owned by the view state.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Prefix shared by every slide element id (`l-post--03-04`).
pub const SLIDE_ID_PREFIX: &str = "l-post--";

/// A `MM-DD` key identifying one slide within a month-scoped archive.
///
/// Always two digits per field. Built from numeric month/day fields only,
/// never from locale-dependent date formatting.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(String);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(format!("{:02}-{:02}", date.month(), date.day()))
    }

    /// Parse a `MM-DD` string. Returns `None` unless both fields are exactly
    /// two ASCII digits and in calendar range.
    ///
    /// - `"03-04"` → `Some`
    /// - `"3-4"` → `None` (not padded)
    /// - `"13-01"` → `None`
    pub fn parse(s: &str) -> Option<Self> {
        let (month, day) = s.split_once('-')?;
        if month.len() != 2 || day.len() != 2 {
            return None;
        }
        if !month.bytes().chain(day.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        let m: u32 = month.parse().ok()?;
        let d: u32 = day.parse().ok()?;
        if !(1..=12).contains(&m) || !(1..=31).contains(&d) {
            return None;
        }
        Some(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Element id of the slide carrying this key.
    pub fn slide_id(&self) -> String {
        format!("{SLIDE_ID_PREFIX}{}", self.0)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DateKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DateKey::parse(&value).ok_or_else(|| format!("invalid date key '{value}', expected MM-DD"))
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.0
    }
}

impl PartialEq<str> for DateKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DateKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One dated slide, created during assembly and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideRecord {
    /// Element id: [`SLIDE_ID_PREFIX`] + date key.
    pub id: String,
    pub date_key: DateKey,
    /// Archive markup for the date. Empty when the archive has no entry.
    pub markup: String,
}

/// Month archive document: `{ "total": n, "posts": { "MM-DD": "<markup>" } }`.
///
/// Posts stay keyed by raw string so that one bad key in upstream data does not
/// reject the whole month; lookups use [`DateKey::as_str`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ArchivePayload {
    pub total: u32,
    #[serde(default)]
    pub posts: BTreeMap<String, String>,
}

/// Artwork records keyed by `MM-DD`, from `/{namespace}/{MM}-artwork.json`.
pub type ArtworkCatalog = BTreeMap<String, Artwork>;

/// Per-breakpoint pixel widths used to build responsive `srcset`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageWidths {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
    pub xl2: u32,
    pub xl3: u32,
}

impl Default for ImageWidths {
    fn default() -> Self {
        Self {
            sm: 480,
            md: 768,
            lg: 1024,
            xl: 1440,
            xl2: 1920,
            xl3: 2560,
        }
    }
}

impl ImageWidths {
    /// Widths paired with their breakpoint names, smallest first.
    pub fn breakpoints(&self) -> [(&'static str, u32); 6] {
        [
            ("sm", self.sm),
            ("md", self.md),
            ("lg", self.lg),
            ("xl", self.xl),
            ("xl2", self.xl2),
            ("xl3", self.xl3),
        ]
    }
}

/// Artwork shown on a slide. Every breakpoint URL is optional; upstream data
/// regularly omits the largest sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artwork {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub medium: Option<String>,
    pub year: Option<String>,
    pub alt: Option<String>,
    pub sm: Option<String>,
    pub md: Option<String>,
    pub lg: Option<String>,
    pub xl: Option<String>,
    pub xl2: Option<String>,
    pub xl3: Option<String>,
}

impl Artwork {
    /// URL for a breakpoint name from [`ImageWidths::breakpoints`].
    pub fn url_for(&self, breakpoint: &str) -> Option<&str> {
        match breakpoint {
            "sm" => self.sm.as_deref(),
            "md" => self.md.as_deref(),
            "lg" => self.lg.as_deref(),
            "xl" => self.xl.as_deref(),
            "xl2" => self.xl2.as_deref(),
            "xl3" => self.xl3.as_deref(),
            _ => None,
        }
    }
}
