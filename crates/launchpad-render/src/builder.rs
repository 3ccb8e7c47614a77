//! Static site builder.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use launchpad_content::{ContentLoader, ContentSource, LoadError, HOME_PAGE};

use crate::document::Document;
use crate::renderer::Renderer;
use crate::surface::PageContext;
use crate::templates::TemplateEngine;

/// Configuration for building a static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages written
    pub pages: usize,

    /// Pages written with the configuration error in place of their content
    pub failed: Vec<String>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to load site configuration: {0}")]
    Config(#[from] LoadError),

    #[error("Failed to render template for {page}: {source}")]
    Template {
        page: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Renders every configured page of a site into an output directory.
pub struct SiteBuilder<S> {
    config: BuildConfig,
    loader: ContentLoader<S>,
    renderer: Renderer,
    templates: TemplateEngine,
}

impl<S: ContentSource> SiteBuilder<S> {
    /// Create a new site builder.
    pub fn new(config: BuildConfig, loader: ContentLoader<S>, renderer: Renderer) -> Self {
        Self {
            config,
            loader,
            renderer,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let site = self.loader.load_config().await?;

        // Populate sequentially; each page awaits its own content.
        let mut documents = Vec::new();
        let mut failed = Vec::new();

        for id in site.page_ids() {
            if !is_page_id(&id) {
                tracing::warn!("Skipping page with unusable id {:?}", id);
                continue;
            }

            let page = PageContext::for_page(&id);
            let mut document = Document::new();

            if self
                .renderer
                .initialise_with(&site, &self.loader, &mut document, &page)
                .await
                .is_err()
            {
                failed.push(id);
            }

            documents.push((page, document));
        }

        // Serialize and write pages in parallel
        let results: Vec<Result<(), BuildError>> = documents
            .par_iter()
            .map(|(page, document)| self.write_page(page, document))
            .collect();

        for result in results {
            result?;
        }

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: documents.len(),
            failed,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn write_page(&self, page: &PageContext, document: &Document) -> Result<(), BuildError> {
        let html = self
            .templates
            .render_document(document, page)
            .map_err(|source| BuildError::Template {
                page: page.page().to_string(),
                source,
            })?;

        let output_path = self.output_path(page.page());
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
        }

        fs::write(&output_path, html)
            .map_err(|e| BuildError::Write(format!("{}: {}", output_path.display(), e)))?;

        tracing::debug!("Wrote {}", output_path.display());
        Ok(())
    }

    /// `home` -> `dist/index.html`, `about` -> `dist/about/index.html`
    fn output_path(&self, page: &str) -> PathBuf {
        if page == HOME_PAGE {
            self.config.output_dir.join("index.html")
        } else {
            self.config.output_dir.join(page).join("index.html")
        }
    }
}

/// Page ids become directory names, so they must be a single plain segment.
fn is_page_id(id: &str) -> bool {
    let mut components = Path::new(id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
