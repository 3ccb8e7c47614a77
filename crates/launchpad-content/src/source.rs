//! Places content documents can be fetched from.

use std::io;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use url::Url;

/// Status reported for documents that do not exist.
pub const NOT_FOUND: u16 = 404;

/// A fetched document with its HTTP-style status.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub status: u16,
    pub body: String,
}

impl Fetched {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors raised before a status is available.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid request path {0}")]
    InvalidPath(String),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// A source of site content addressed by absolute URL paths
/// such as `/content/site.json`.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch a document, bypassing any cache.
    async fn fetch(&self, path: &str) -> Result<Fetched, SourceError>;
}

#[async_trait]
impl<S: ContentSource + ?Sized> ContentSource for Box<S> {
    async fn fetch(&self, path: &str) -> Result<Fetched, SourceError> {
        (**self).fetch(path).await
    }
}

/// Fetches content from a running web server.
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    /// Create a source rooted at `base` (e.g. `http://localhost:8000`).
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }

    /// Use an existing client.
    pub fn with_client(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Fetched, SourceError> {
        let url = self
            .base
            .join(path)
            .map_err(|_| SourceError::InvalidPath(path.to_string()))?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Fetched { status, body })
    }
}

/// Reads content straight from a project directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a URL path onto the root, refusing anything that climbs out of it.
    fn locate(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut located = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => located.push(part),
                Component::CurDir => {}
                _ => return None,
            }
        }
        Some(located)
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<Fetched, SourceError> {
        let Some(file) = self.locate(path) else {
            return Ok(Fetched::status(NOT_FOUND));
        };

        // Invalid UTF-8 is replaced rather than failing the page.
        match tokio::fs::read(&file).await {
            Ok(bytes) => Ok(Fetched::ok(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Fetched::status(NOT_FOUND)),
            Err(e) => Err(SourceError::Io(e)),
        }
    }
}
