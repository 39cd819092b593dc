use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::health::ThresholdOverrides;

/// Persistent defaults read from `config.json`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: Option<String>,
    /// Process to look up when `--process` is not given
    #[serde(default)]
    pub process: Option<String>,
    #[serde(default)]
    pub thresholds: ThresholdOverrides,
}

impl Config {
    /// Load the user config, or an empty one when the file does not exist
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            log::debug!("no config file at {:?}", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load a config file that must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        log::debug!("loaded config from {:?}", path);

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, data)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("syshealth").join("config.json"))
    }
}
