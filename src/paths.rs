//! Common paths for icon lookup and configuration
//!
//! - `~/.config/nautilus-icons/config.toml` - User configuration
//! - `~/.local/share/nautilus/icons/` - Per-user icon files and themes
//! - `/usr/share/pixmaps/nautilus/` - System icon files and themes

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "nautilus-icons";

/// System-wide icon root.
pub const SYSTEM_ICON_DIR: &str = "/usr/share/pixmaps/nautilus";

/// Get the config directory (~/.config/nautilus-icons/)
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Get the config file path (~/.config/nautilus-icons/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get the per-user icon root (~/.local/share/nautilus/icons/)
pub fn user_icon_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("nautilus").join("icons"))
}

/// Icon roots searched when the config does not list any, user first.
pub fn default_search_paths() -> Vec<PathBuf> {
    user_icon_dir()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(SYSTEM_ICON_DIR)))
        .collect()
}
