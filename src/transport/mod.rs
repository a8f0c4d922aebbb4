//! Archive transports.
//!
//! | Kind | Adapter | Needs |
//! |---|---|---|
//! | `http` | [`HttpTransport`] | `transport.base_url` |
//! | `file` | [`FileTransport`] | `transport.root` (existing directory) |
//!
//! One transport is chosen at startup by [`select_transport`]: the configured
//! kinds are tried in order and the first adapter that can be built is used
//! for the whole run. Later kinds are never constructed.

pub mod backend;
pub mod file;
pub mod http;

pub use backend::{Transport, TransportError};
pub use file::FileTransport;
pub use http::HttpTransport;

use crate::config::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    Http,
    File,
}

impl TransportKind {
    fn build(self, config: &TransportConfig) -> Result<Box<dyn Transport>, TransportError> {
        match self {
            TransportKind::Http => {
                let base_url = config
                    .base_url
                    .as_deref()
                    .ok_or_else(|| TransportError::Unavailable {
                        kind: "http",
                        reason: "transport.base_url not set".into(),
                    })?;
                Ok(Box::new(HttpTransport::new(base_url)?))
            }
            TransportKind::File => {
                let root = config
                    .root
                    .as_deref()
                    .ok_or_else(|| TransportError::Unavailable {
                        kind: "file",
                        reason: "transport.root not set".into(),
                    })?;
                Ok(Box::new(FileTransport::new(root)?))
            }
        }
    }
}

/// Build the first constructible transport from `config.order`.
pub fn select_transport(config: &TransportConfig) -> Result<Box<dyn Transport>, TransportError> {
    for kind in &config.order {
        match kind.build(config) {
            Ok(transport) => {
                info!(transport = transport.name(), "transport selected");
                return Ok(transport);
            }
            Err(e) => debug!(?kind, error = %e, "transport skipped"),
        }
    }
    Err(TransportError::NoTransport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(order: Vec<TransportKind>, base_url: Option<&str>, root: Option<&str>) -> TransportConfig {
        TransportConfig {
            order,
            base_url: base_url.map(String::from),
            root: root.map(String::from),
        }
    }

    #[test]
    fn first_constructible_wins() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap();
        let cfg = config(
            vec![TransportKind::Http, TransportKind::File],
            Some("https://example.com"),
            Some(root),
        );
        assert_eq!(select_transport(&cfg).unwrap().name(), "http");
    }

    #[test]
    fn falls_back_when_earlier_kind_unavailable() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap();
        let cfg = config(
            vec![TransportKind::Http, TransportKind::File],
            None,
            Some(root),
        );
        assert_eq!(select_transport(&cfg).unwrap().name(), "file");
    }

    #[test]
    fn order_is_respected() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().to_str().unwrap();
        let cfg = config(
            vec![TransportKind::File, TransportKind::Http],
            Some("https://example.com"),
            Some(root),
        );
        assert_eq!(select_transport(&cfg).unwrap().name(), "file");
    }

    #[test]
    fn nothing_constructible_is_error() {
        let cfg = config(
            vec![TransportKind::Http, TransportKind::File],
            Some("::bad::"),
            Some("/definitely/not/here"),
        );
        assert!(matches!(
            select_transport(&cfg),
            Err(TransportError::NoTransport)
        ));
    }

    #[test]
    fn kind_parses_lowercase() {
        let kinds: Vec<TransportKind> = serde_json::from_str(r#"["http","file"]"#).unwrap();
        assert_eq!(kinds, vec![TransportKind::Http, TransportKind::File]);
    }
}
