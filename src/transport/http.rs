//! HTTP adapter backed by `reqwest`.

use super::backend::{Transport, TransportError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use tracing::debug;

pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a client for `base_url` (e.g. `https://example.com`).
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url).map_err(|e| TransportError::Unavailable {
            kind: "http",
            reason: format!("invalid base_url '{base_url}': {e}"),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::Unavailable {
                kind: "http",
                reason: format!("base_url '{base_url}' cannot be a base"),
            });
        }
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, base_url })
    }

    pub(crate) fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::Unavailable {
                kind: "http",
                reason: format!("cannot join '{path}': {e}"),
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_json(&self, path: &str) -> Result<Vec<u8>, TransportError> {
        let url = self.url_for(path)?;
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|_| TransportError::Incomplete)?;
        Ok(body.to_vec())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
