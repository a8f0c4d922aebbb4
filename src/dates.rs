//! Backward date window around the anchor date.
//!
//! Only numeric month/day fields are ever extracted, so output is identical
//! under every locale and timezone formatting setting.

use crate::types::DateKey;
use chrono::{Datelike, Days, Local, NaiveDate};

/// The calendar date `offset` days before `anchor`.
///
/// Month and year boundaries roll over naturally (`2014-03-01` minus one day
/// is `2014-02-28`). Saturates at the earliest representable date.
pub fn days_before(anchor: NaiveDate, offset: u32) -> NaiveDate {
    anchor
        .checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(NaiveDate::MIN)
}

/// Zero-padded `MM` for the archive path.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:02}", date.month())
}

/// Pick the anchor date: the configured one if set, otherwise today's local date.
pub fn resolve_anchor(configured: Option<NaiveDate>) -> NaiveDate {
    match configured {
        Some(date) => date,
        None => Local::now().date_naive(),
    }
}

/// Keys for the `count` dates ending at `anchor`, newest first.
pub fn window_keys(anchor: NaiveDate, count: u32) -> impl Iterator<Item = DateKey> {
    (0..count).map(move |i| DateKey::from_date(days_before(anchor, i)))
}
