use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::report::OutputFormat;

pub const CONFIG_FILE_NAME: &str = "rangeclamp.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub describe: DescribeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeConfig {
    #[serde(default)]
    pub min_complexity: usize,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
        Ok(config)
    }

    /// Looks for `rangeclamp.yml` in `dir_path`, then `~/.rangeclamp/config.yaml`,
    /// and falls back to defaults when neither exists.
    pub fn load_from_dir<P: AsRef<Path>>(dir_path: P) -> Result<Self> {
        let local = dir_path.as_ref().join(CONFIG_FILE_NAME);
        if local.exists() {
            tracing::debug!("Loading config from {}", local.display());
            return Self::load_from_file(local);
        }

        match Self::default_config_path() {
            Some(global) if global.exists() => {
                tracing::debug!("Loading config from {}", global.display());
                Self::load_from_file(global)
            }
            _ => Ok(Config::default()),
        }
    }

    /// `~/.rangeclamp/config.yaml`, if a home directory is known.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".rangeclamp").join("config.yaml"))
    }
}
