//! Configuration management for sortty

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_INPUT;
use crate::playback::Speed;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Numbers loaded on startup
    pub default_input: String,

    /// Initial playback speed (1 = slow, 5 = fast)
    pub speed: u8,

    /// How often the UI polls for key events, in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_input: DEFAULT_INPUT.to_string(),
            speed: Speed::default().level(),
            tick_rate_ms: 50,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        match Self::read_from(&Self::config_path()?)? {
            Some(config) => Ok(config),
            None => {
                let config = Self::default();
                config.save()?;
                Ok(config)
            }
        }
    }

    /// Load configuration from disk without creating anything; defaults when
    /// no file exists
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::read_from(&Self::config_path()?)?.unwrap_or_default())
    }

    /// Read the config at `path`, or `None` if there is no file there
    pub fn read_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        Self::from_json(&contents).map(Some)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).with_context(|| "Failed to parse config.json")
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "sortty").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path (log files live here)
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "sortty").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Configured speed, clamped to a valid level
    pub fn speed(&self) -> Speed {
        Speed::new(self.speed)
    }
}
