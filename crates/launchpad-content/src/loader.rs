//! Config and page content loading.

use crate::config::SiteConfig;
use crate::source::{ContentSource, SourceError, NOT_FOUND};

/// Location of the site configuration document.
pub const CONFIG_PATH: &str = "/content/site.json";

/// Path of the markdown document for a slug.
pub fn page_content_path(slug: &str) -> String {
    format!("/content/pages/{}.md", slug)
}

/// Markdown shown for pages whose document does not exist yet.
pub fn coming_soon(slug: &str) -> String {
    format!(
        "# Coming soon\nWe don't have content for the **{}** page yet.",
        slug
    )
}

/// Errors that can occur while loading site content.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The configuration document answered with a non-success status.
    #[error("Request for {url} failed with status {status}")]
    Config { url: String, status: u16 },

    /// A page document answered with a status other than success or 404.
    #[error("Unable to load {url} ({status})")]
    Content { url: String, status: u16 },

    #[error("Invalid site configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Request for {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: SourceError,
    },
}

/// Loads the site configuration and per-page markdown from a source.
pub struct ContentLoader<S> {
    source: S,
}

impl<S: ContentSource> ContentLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and parse `/content/site.json`.
    pub async fn load_config(&self) -> Result<SiteConfig, LoadError> {
        let fetched = self
            .source
            .fetch(CONFIG_PATH)
            .await
            .map_err(|source| LoadError::Transport {
                url: CONFIG_PATH.to_string(),
                source,
            })?;

        if !fetched.is_success() {
            return Err(LoadError::Config {
                url: CONFIG_PATH.to_string(),
                status: fetched.status,
            });
        }

        Ok(SiteConfig::from_json(&fetched.body)?)
    }

    /// Fetch the markdown for `slug`, substituting a placeholder when it is missing.
    pub async fn load_page_content(&self, slug: &str) -> Result<String, LoadError> {
        let url = page_content_path(slug);
        let fetched = self
            .source
            .fetch(&url)
            .await
            .map_err(|source| LoadError::Transport {
                url: url.clone(),
                source,
            })?;

        if fetched.is_success() {
            return Ok(fetched.body);
        }

        if fetched.status == NOT_FOUND {
            tracing::debug!("No content for {}, using placeholder", slug);
            return Ok(coming_soon(slug));
        }

        Err(LoadError::Content {
            url,
            status: fetched.status,
        })
    }
}
