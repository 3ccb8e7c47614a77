//! Development server command.

use std::env;

use anyhow::{Context, Result};
use launchpad_server::{DevServer, DevServerConfig};

use crate::config::ConfigFile;

const DEFAULT_PORT: u16 = 8000;

/// Run the serve command.
pub async fn run(config: &ConfigFile) -> Result<()> {
    let port = port_from(env::var("PORT").ok().as_deref())?;

    let server = DevServer::new(DevServerConfig {
        app_root: config.server.app_root.clone(),
        project_root: config.server.project_root.clone(),
        port,
        ..DevServerConfig::default()
    });

    server.start().await?;

    Ok(())
}

/// Port from the `PORT` variable; unset or empty means the default.
fn port_from(value: Option<&str>) -> Result<u16> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid PORT value {:?}", value)),
        None => Ok(DEFAULT_PORT),
    }
}
