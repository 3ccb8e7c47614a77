//! Static site build command.

use std::path::PathBuf;

use anyhow::Result;
use launchpad_content::{ContentLoader, DirSource};
use launchpad_render::{BuildConfig, Renderer, SiteBuilder};

use crate::config::ConfigFile;

/// Run the build command.
pub async fn run(config: &ConfigFile, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building site from {}...", config.site.root.display());

    let build_config = BuildConfig {
        output_dir: output.unwrap_or_else(|| config.site.output.clone()),
    };
    let loader = ContentLoader::new(DirSource::new(&config.site.root));

    let result = SiteBuilder::new(build_config, loader, Renderer::default())
        .build()
        .await?;

    tracing::info!("Built {} pages in {}ms", result.pages, result.duration_ms);
    for page in &result.failed {
        tracing::warn!("Page {} shows a configuration error", page);
    }

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
