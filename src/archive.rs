//! Month archive fetch.
//!
//! One request per gallery view: `/{namespace}/{MM}-slides.json`. On a
//! complete, successful, parseable response the callback runs exactly once
//! with `(posts, total)`. Every failure (bad status, transport error,
//! malformed JSON) is logged and swallowed: the callback never runs, nothing
//! is retried and no error reaches the caller. The view simply shows no
//! slides.
//!
//! The artwork catalog (`/{namespace}/{MM}-artwork.json`) is optional and
//! follows the same rule: any failure yields an empty catalog.

use crate::transport::{Transport, TransportError};
use crate::types::{ArchivePayload, ArtworkCatalog};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub(crate) enum ArchiveError {
    #[error("transport: {0}")]
    Transport(#[from] TransportError),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Request path for a month's archive, e.g. `/api/03-slides.json`.
pub fn archive_path(namespace: &str, month: &str) -> String {
    format!("/{namespace}/{month}-slides.json")
}

/// Request path for a month's artwork catalog, e.g. `/api/03-artwork.json`.
pub fn artwork_path(namespace: &str, month: &str) -> String {
    format!("/{namespace}/{month}-artwork.json")
}

async fn load_json<T, D>(transport: &T, path: &str) -> Result<D, ArchiveError>
where
    T: Transport + ?Sized,
    D: DeserializeOwned,
{
    let body = transport.fetch_json(path).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Fetch the archive at `path` and hand `(posts, total)` to `on_ready`.
///
/// `on_ready` is called at most once, and only on success.
pub async fn fetch_archive<T, F>(transport: &T, path: &str, on_ready: F)
where
    T: Transport + ?Sized,
    F: FnOnce(BTreeMap<String, String>, u32),
{
    match load_json::<_, ArchivePayload>(transport, path).await {
        Ok(payload) => {
            debug!(path, total = payload.total, posts = payload.posts.len(), "archive loaded");
            on_ready(payload.posts, payload.total);
        }
        Err(e) => warn!(path, transport = transport.name(), error = %e, "archive fetch failed"),
    }
}

/// Fetch the artwork catalog at `path`. Empty on any failure.
pub async fn fetch_artwork<T>(transport: &T, path: &str) -> ArtworkCatalog
where
    T: Transport + ?Sized,
{
    match load_json(transport, path).await {
        Ok(catalog) => catalog,
        Err(e) => {
            debug!(path, error = %e, "no artwork catalog");
            ArtworkCatalog::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::{MAX_WINDOW_DAYS, assemble_slides};
    use crate::test_helpers::{StaticTransport, anchor_2014_03_04};

    #[test]
    fn path_is_namespaced_by_month() {
        assert_eq!(archive_path("api", "03"), "/api/03-slides.json");
    }

    #[tokio::test]
    async fn success_invokes_callback_once() {
        let transport = StaticTransport::ok(
            r#"{"total": 2, "posts": {"03-04": "<p>A</p>", "03-03": "<p>B</p>"}}"#,
        );
        let mut calls = Vec::new();
        fetch_archive(&transport, "/api/03-slides.json", |posts, total| {
            calls.push((posts, total));
        })
        .await;

        assert_eq!(calls.len(), 1);
        let (posts, total) = &calls[0];
        assert_eq!(*total, 2);
        assert_eq!(posts.get("03-03").map(String::as_str), Some("<p>B</p>"));
        assert_eq!(transport.requests(), vec!["/api/03-slides.json"]);
    }

    #[tokio::test]
    async fn bad_status_never_calls_back() {
        let transport = StaticTransport::failing(TransportError::Status(500));
        let mut called = false;
        fetch_archive(&transport, "/api/03-slides.json", |_, _| called = true).await;
        assert!(!called);
        assert_eq!(transport.requests().len(), 1, "no retry");
    }

    #[tokio::test]
    async fn incomplete_response_never_calls_back() {
        let transport = StaticTransport::failing(TransportError::Incomplete);
        let mut called = false;
        fetch_archive(&transport, "/api/03-slides.json", |_, _| called = true).await;
        assert!(!called);
    }

    #[tokio::test]
    async fn malformed_json_never_calls_back() {
        let transport = StaticTransport::ok("{ total: ");
        let mut called = false;
        fetch_archive(&transport, "/api/03-slides.json", |_, _| called = true).await;
        assert!(!called);
    }

    #[tokio::test]
    async fn negative_total_is_malformed() {
        let transport = StaticTransport::ok(r#"{"total": -3, "posts": {}}"#);
        let mut called = false;
        fetch_archive(&transport, "/api/03-slides.json", |_, _| called = true).await;
        assert!(!called);
    }

    #[tokio::test]
    async fn empty_archive_still_calls_back() {
        let transport = StaticTransport::ok(r#"{"total": 0, "posts": {}}"#);
        let mut seen = None;
        fetch_archive(&transport, "/api/03-slides.json", |posts, total| {
            seen = Some((posts.len(), total));
        })
        .await;
        assert_eq!(seen, Some((0, 0)));
    }

    #[tokio::test]
    async fn huge_total_assembles_a_bounded_window() {
        let transport = StaticTransport::ok(r#"{"total": 4294967295, "posts": {}}"#);
        let mut slides = None;
        fetch_archive(&transport, "/api/03-slides.json", |posts, total| {
            assert_eq!(total, u32::MAX);
            slides = Some(assemble_slides(anchor_2014_03_04(), total, &posts).len());
        })
        .await;
        let slides = slides.expect("callback ran");
        assert!(slides <= MAX_WINDOW_DAYS as usize);
    }

    #[test]
    fn artwork_path_is_namespaced_by_month() {
        assert_eq!(artwork_path("api", "03"), "/api/03-artwork.json");
    }

    #[tokio::test]
    async fn artwork_catalog_parses() {
        let transport =
            StaticTransport::ok(r#"{"03-04": {"title": "Harbour", "sm": "a.jpg", "xl3": null}}"#);
        let catalog = fetch_artwork(&transport, "/api/03-artwork.json").await;
        assert_eq!(catalog["03-04"].title.as_deref(), Some("Harbour"));
        assert_eq!(catalog["03-04"].url_for("xl3"), None);
    }

    #[tokio::test]
    async fn missing_artwork_catalog_is_empty() {
        let transport = StaticTransport::failing(TransportError::Status(404));
        assert!(fetch_artwork(&transport, "/api/03-artwork.json").await.is_empty());
    }
}
