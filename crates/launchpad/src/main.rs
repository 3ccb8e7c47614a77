//! LaunchPad CLI - build, render and serve per-customer marketing sites.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(about = "Build, render and serve LaunchPad marketing sites")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to launchpad.toml config file
    #[arg(short, long, default_value = "launchpad.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every page into a static site
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a single page to stdout
    Render {
        /// Page identifier
        #[arg(short, long, default_value = "home")]
        page: String,

        /// Base URL of a running server to read content from
        #[arg(short, long)]
        source: Option<Url>,
    },

    /// Start the static development server (port from $PORT, default 8000)
    Serve,

    /// Submit a page's contact form
    Contact {
        /// Page identifier
        #[arg(short, long, default_value = "home")]
        page: String,

        /// Base URL of a running server to read content from
        #[arg(short, long)]
        source: Option<Url>,

        /// Form values as FIELD=VALUE
        fields: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = config::load_config(&cli.config)?;

    // Execute command
    match cli.command {
        Commands::Build { output } => {
            commands::build::run(&config, output).await?;
        }
        Commands::Render { page, source } => {
            commands::render::run(&config, &page, source).await?;
        }
        Commands::Serve => {
            commands::serve::run(&config).await?;
        }
        Commands::Contact {
            page,
            source,
            fields,
        } => {
            commands::contact::run(&config, &page, source, &fields).await?;
        }
    }

    Ok(())
}
