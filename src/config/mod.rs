// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[display]` - Viewer display settings (overlay default, pane heights)
//! - `[export]` - Export settings (default raster format)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory override (`--config-dir` on the CLI)
//! 3. Falls back to the platform-specific config directory

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "DermaLens";

/// Whether the detection overlay starts visible.
pub const DEFAULT_OVERLAY_ENABLED: bool = true;
/// Display-pane height in compact/preview mode, in logical pixels.
pub const DEFAULT_PREVIEW_HEIGHT: f32 = 300.0;
/// Display-pane height in full mode, in logical pixels.
pub const DEFAULT_FULL_HEIGHT: f32 = 500.0;
/// Default export format extension.
pub const DEFAULT_EXPORT_FORMAT: &str = "png";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Whether the region overlay is shown when a new analysis opens.
    #[serde(default)]
    pub overlay_enabled: Option<bool>,
    #[serde(default)]
    pub preview_height: Option<f32>,
    #[serde(default)]
    pub full_height: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default raster format extension: `png`, `jpg` or `webp`.
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    #[must_use]
    pub fn overlay_enabled(&self) -> bool {
        self.display
            .overlay_enabled
            .unwrap_or(DEFAULT_OVERLAY_ENABLED)
    }

    #[must_use]
    pub fn preview_height(&self) -> f32 {
        self.display
            .preview_height
            .filter(|h| *h > 0.0)
            .unwrap_or(DEFAULT_PREVIEW_HEIGHT)
    }

    #[must_use]
    pub fn full_height(&self) -> f32 {
        self.display
            .full_height
            .filter(|h| *h > 0.0)
            .unwrap_or(DEFAULT_FULL_HEIGHT)
    }

    #[must_use]
    pub fn export_format(&self) -> &str {
        self.export.format.as_deref().unwrap_or(DEFAULT_EXPORT_FORMAT)
    }
}

fn config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(dir.join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults when no file exists.
///
/// Returns the config plus an optional human-readable warning when an
/// existing file could not be read or parsed (the defaults are used in
/// that case rather than failing startup).
#[must_use]
pub fn load(dir_override: Option<&Path>) -> (Config, Option<String>) {
    let Some(path) = config_path(dir_override) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("Could not read {}: {}", path.display(), err)),
        ),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| Error::Config(e.to_string()))?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save(config: &Config, dir_override: Option<&Path>) -> Result<()> {
    if let Some(path) = config_path(dir_override) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Config(e.to_string()))?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(|e| Error::Config(e.to_string()))?;
    Ok(())
}
