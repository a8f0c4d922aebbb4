//! Filesystem adapter: serves archive paths from a local directory.
//!
//! `/api/03-slides.json` resolves to `<root>/api/03-slides.json`. A missing
//! file maps to status 404 so callers see the same failure shape as HTTP.

use super::backend::{Transport, TransportError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub struct FileTransport {
    root: PathBuf,
}

impl FileTransport {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, TransportError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(TransportError::Unavailable {
                kind: "file",
                reason: format!("{} is not a directory", root.display()),
            });
        }
        Ok(Self { root })
    }

    /// Map a request path into the root. Paths escaping the root resolve to `None`.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(resolved)
    }
}

#[async_trait]
impl Transport for FileTransport {
    async fn fetch_json(&self, path: &str) -> Result<Vec<u8>, TransportError> {
        let file = self.resolve(path).ok_or(TransportError::Status(404))?;
        debug!(path = %file.display(), "read");
        match tokio::fs::read(&file).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(TransportError::Status(404)),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_root_is_unavailable() {
        let result = FileTransport::new("/definitely/not/here");
        assert!(matches!(
            result,
            Err(TransportError::Unavailable { kind: "file", .. })
        ));
    }

    #[tokio::test]
    async fn reads_file_under_root() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("api")).unwrap();
        fs::write(tmp.path().join("api/03-slides.json"), r#"{"total":0}"#).unwrap();

        let transport = FileTransport::new(tmp.path()).unwrap();
        let body = transport.fetch_json("/api/03-slides.json").await.unwrap();
        assert_eq!(body, br#"{"total":0}"#);
    }

    #[tokio::test]
    async fn missing_file_is_404() {
        let tmp = TempDir::new().unwrap();
        let transport = FileTransport::new(tmp.path()).unwrap();
        let result = transport.fetch_json("/api/03-slides.json").await;
        assert!(matches!(result, Err(TransportError::Status(404))));
    }

    #[tokio::test]
    async fn parent_traversal_is_refused() {
        let tmp = TempDir::new().unwrap();
        let transport = FileTransport::new(tmp.path()).unwrap();
        let result = transport.fetch_json("/../etc/passwd").await;
        assert!(matches!(result, Err(TransportError::Status(404))));
    }
}
