//! Configuration module for the icon factory

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::icons::zoom::ICON_SIZE_STANDARD;
use crate::paths;

/// Icon factory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Active icon theme (None = unthemed icons only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Size icons are decoded at; other sizes are scaled from it
    #[serde(default = "default_size")]
    pub default_size: u32,

    /// Number of recently used icons protected from sweeping
    #[serde(default = "default_recently_used_capacity")]
    pub recently_used_capacity: usize,

    /// Delay before a scheduled sweep runs, in seconds
    #[serde(default = "default_sweep_delay")]
    pub sweep_delay_secs: u64,

    /// Icon roots, searched in order
    #[serde(default = "paths::default_search_paths")]
    pub search_paths: Vec<PathBuf>,
}

fn default_size() -> u32 {
    ICON_SIZE_STANDARD
}

fn default_recently_used_capacity() -> usize {
    20
}

fn default_sweep_delay() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: None,
            default_size: default_size(),
            recently_used_capacity: default_recently_used_capacity(),
            sweep_delay_secs: default_sweep_delay(),
            search_paths: paths::default_search_paths(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        paths::config_path()
    }

    /// Load config from the default path or create default
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Decode size, never zero
    pub fn effective_default_size(&self) -> u32 {
        self.default_size.max(1)
    }

    /// Recently-used capacity, never zero
    pub fn effective_recently_used_capacity(&self) -> usize {
        self.recently_used_capacity.max(1)
    }

    /// Sweep delay as a duration
    pub const fn sweep_delay(&self) -> Duration {
        Duration::from_secs(self.sweep_delay_secs)
    }
}
