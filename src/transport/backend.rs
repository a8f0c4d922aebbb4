//! Transport trait and shared error type.
//!
//! The [`Transport`] trait is the single capability the archive fetcher needs:
//! fetch the raw JSON body at a path. Adapters live next to it:
//!
//! - [`HttpTransport`](super::http::HttpTransport): GET against a base URL
//! - [`FileTransport`](super::file::FileTransport): read from a local directory

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response body incomplete")]
    Incomplete,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{kind} transport unavailable: {reason}")]
    Unavailable { kind: &'static str, reason: String },
    #[error("no transport could be constructed")]
    NoTransport,
}

/// Fetches a JSON document by path.
///
/// Implementations return the body only for a complete, successful response;
/// anything else is an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_json(&self, path: &str) -> Result<Vec<u8>, TransportError>;

    /// Short name for logs (`http`, `file`).
    fn name(&self) -> &'static str;
}
