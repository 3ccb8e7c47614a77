//! Project configuration (launchpad.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct SiteSettings {
    /// Directory holding `content/`
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ServerSettings {
    #[serde(default = "default_app_root")]
    pub app_root: PathBuf,
    #[serde(default = "default_root")]
    pub project_root: PathBuf,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            app_root: default_app_root(),
            project_root: default_root(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}
fn default_output() -> PathBuf {
    PathBuf::from("dist")
}
fn default_app_root() -> PathBuf {
    PathBuf::from("src")
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("launchpad.toml")).unwrap();

        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.server.app_root, PathBuf::from("src"));
        assert_eq!(config.site.output, PathBuf::from("dist"));
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("launchpad.toml");
        fs::write(&path, "[site]\noutput = \"public\"\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.site.output, PathBuf::from("public"));
        assert_eq!(config.site.root, PathBuf::from("."));
        assert_eq!(config.server, ServerSettings::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("launchpad.toml");
        fs::write(&path, "[site\nroot = ").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse"));
    }
}
