//! Gallery configuration.
//!
//! Loaded from `gallery.toml`. Stock defaults are serialized to a TOML table
//! and the user file is merged on top, so a config file only needs the keys
//! it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Art Slider"      # Page title
//! namespace = "api"         # Archive path prefix: /{namespace}/{MM}-slides.json
//! # anchor_date = "2014-03-04"  # Fixed "today" (omit to use the local date)
//!
//! [transport]
//! order = ["http", "file"]  # Tried in order at startup, first usable wins
//! # base_url = "https://example.com"  # Required by the http transport
//! root = "public"           # Directory served by the file transport
//!
//! [image_widths]
//! sm = 480
//! md = 768
//! lg = 1024
//! xl = 1440
//! xl2 = 1920
//! xl3 = 2560
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::transport::TransportKind;
use crate::types::ImageWidths;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Page title for the generated gallery.
    pub title: String,
    /// First path segment of the archive URL.
    pub namespace: String,
    /// Fixed anchor date (`"YYYY-MM-DD"`). Absent means today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_date: Option<NaiveDate>,
    pub transport: TransportConfig,
    pub image_widths: ImageWidths,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Art Slider".to_string(),
            namespace: "api".to_string(),
            anchor_date: None,
            transport: TransportConfig::default(),
            image_widths: ImageWidths::default(),
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.namespace.is_empty() {
            return Err(ConfigError::Validation("namespace must not be empty".into()));
        }
        if self.namespace.contains('/') {
            return Err(ConfigError::Validation(
                "namespace must be a single path segment".into(),
            ));
        }
        if self.transport.order.is_empty() {
            return Err(ConfigError::Validation(
                "transport.order must list at least one transport".into(),
            ));
        }
        if let Some((name, _)) = self
            .image_widths
            .breakpoints()
            .into_iter()
            .find(|(_, width)| *width == 0)
        {
            return Err(ConfigError::Validation(format!(
                "image_widths.{name} must be non-zero"
            )));
        }
        Ok(())
    }
}

/// Which transports to try, and what each needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransportConfig {
    pub order: Vec<TransportKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            order: vec![TransportKind::Http, TransportKind::File],
            base_url: None,
            root: Some("public".to_string()),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Stock defaults as a `toml::Value::Table`, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value. `Ok(None)` when the file is absent.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `path` over the stock defaults. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Fully commented stock `gallery.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Art Slider Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Page title for the generated gallery.
title = "Art Slider"

# First path segment of the month archive: /{namespace}/{MM}-slides.json
namespace = "api"

# Fixed anchor date, as a quoted "YYYY-MM-DD" string. Slides are built
# backward from this day. Omit to use today's local date.
# anchor_date = "2014-03-04"

# ---------------------------------------------------------------------------
# Archive transport
# ---------------------------------------------------------------------------
[transport]
# Transports tried in order at startup. The first one that can be set up is
# used for the whole run; the rest are never touched.
#   http - GET {base_url}/{namespace}/{MM}-slides.json
#   file - read {root}/{namespace}/{MM}-slides.json
order = ["http", "file"]

# Base URL for the http transport. Without it, http is skipped.
# base_url = "https://example.com"

# Directory for the file transport. Must exist.
root = "public"

# ---------------------------------------------------------------------------
# Responsive image widths (pixels) per breakpoint
# ---------------------------------------------------------------------------
[image_widths]
sm = 480
md = 768
lg = 1024
xl = 1440
xl2 = 1920
xl3 = 2560
"##
}
