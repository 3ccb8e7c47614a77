//! Single page render command.

use anyhow::{Context, Result};
use launchpad_render::{Document, PageContext, Renderer, TemplateEngine};
use url::Url;

use crate::config::ConfigFile;

/// Run the render command, writing the page to stdout.
///
/// The page is printed even when loading fails, with the error in place of
/// its content.
pub async fn run(config: &ConfigFile, page: &str, source: Option<Url>) -> Result<()> {
    let loader = super::content_loader(&config.site.root, source);
    let context = PageContext::for_page(page);
    let mut document = Document::new();

    let loaded = Renderer::default()
        .initialise(&loader, &mut document, &context)
        .await;

    let html = TemplateEngine::new()
        .render_document(&document, &context)
        .context("Failed to render page template")?;
    println!("{}", html);

    loaded.with_context(|| format!("Page {} rendered with a configuration error", page))
}
