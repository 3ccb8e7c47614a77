//! CLI command implementations.

pub mod build;
pub mod contact;
pub mod render;
pub mod serve;

use std::path::Path;

use launchpad_content::{ContentLoader, ContentSource, DirSource, HttpSource};
use url::Url;

/// Content from a running server when `source` is given, else from `root`.
pub fn content_loader(root: &Path, source: Option<Url>) -> ContentLoader<Box<dyn ContentSource>> {
    let source: Box<dyn ContentSource> = match source {
        Some(base) => {
            tracing::debug!("Reading content from {}", base);
            Box::new(HttpSource::new(base))
        }
        None => {
            tracing::debug!("Reading content from {}", root.display());
            Box::new(DirSource::new(root))
        }
    };
    ContentLoader::new(source)
}
