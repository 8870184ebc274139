// SPDX-License-Identifier: MPL-2.0
//! This module handles the editor's configuration, loaded from and saved to a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[history]` - Edit history capacity
//! - `[viewport]` - Fit padding, zoom steps, layout settle delay
//! - `[interaction]` - Handle sizes and click threshold (screen pixels)
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()` (CLI `--config-dir`)
//! 3. Set `PHOTO_CANVAS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use photo_canvas::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.history.capacity = Some(50);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when an existing file cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Edit history settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryConfig {
    /// Number of image states kept, base image included (2 to 100).
    #[serde(
        default = "default_history_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub capacity: Option<usize>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

/// Viewport settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportConfig {
    /// Padding around the image when fitting (screen pixels).
    #[serde(
        default = "default_fit_padding",
        skip_serializing_if = "Option::is_none"
    )]
    pub fit_padding: Option<f32>,

    /// Zoom multiplier per mouse wheel notch.
    #[serde(
        default = "default_wheel_zoom_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_zoom_factor: Option<f32>,

    /// Additive zoom step for zoom in/out.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Delay before re-fitting after a layout change (milliseconds).
    #[serde(
        default = "default_layout_settle_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub layout_settle_ms: Option<u64>,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            fit_padding: default_fit_padding(),
            wheel_zoom_factor: default_wheel_zoom_factor(),
            zoom_step: default_zoom_step(),
            layout_settle_ms: default_layout_settle_ms(),
        }
    }
}

/// Direct-manipulation settings, all in screen pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionConfig {
    #[serde(
        default = "default_handle_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub handle_size: Option<f32>,

    #[serde(
        default = "default_handle_border",
        skip_serializing_if = "Option::is_none"
    )]
    pub handle_border: Option<f32>,

    #[serde(
        default = "default_outline_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub outline_width: Option<f32>,

    #[serde(
        default = "default_rotate_handle_offset",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotate_handle_offset: Option<f32>,

    /// Pointer travel below which a press-release counts as a click.
    #[serde(
        default = "default_click_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub click_threshold: Option<f32>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            handle_size: default_handle_size(),
            handle_border: default_handle_border(),
            outline_width: default_outline_width(),
            rotate_handle_offset: default_rotate_handle_offset(),
            click_threshold: default_click_threshold(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Editor configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub viewport: ViewportConfig,

    #[serde(default)]
    pub interaction: InteractionConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_history_capacity() -> Option<usize> {
    Some(DEFAULT_HISTORY_CAPACITY)
}

fn default_fit_padding() -> Option<f32> {
    Some(DEFAULT_FIT_PADDING)
}

fn default_wheel_zoom_factor() -> Option<f32> {
    Some(DEFAULT_WHEEL_ZOOM_FACTOR)
}

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP)
}

fn default_layout_settle_ms() -> Option<u64> {
    Some(DEFAULT_LAYOUT_SETTLE_MS)
}

fn default_handle_size() -> Option<f32> {
    Some(DEFAULT_HANDLE_SIZE)
}

fn default_handle_border() -> Option<f32> {
    Some(DEFAULT_HANDLE_BORDER)
}

fn default_outline_width() -> Option<f32> {
    Some(DEFAULT_OUTLINE_WIDTH)
}

fn default_rotate_handle_offset() -> Option<f32> {
    Some(DEFAULT_ROTATE_HANDLE_OFFSET)
}

fn default_click_threshold() -> Option<f32> {
    Some(DEFAULT_CLICK_THRESHOLD)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`] on filesystem failures and [`Error::Config`] if
/// serialization fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            history: HistoryConfig { capacity: Some(40) },
            viewport: ViewportConfig {
                fit_padding: Some(8.0),
                wheel_zoom_factor: Some(1.25),
                zoom_step: Some(0.25),
                layout_settle_ms: Some(150),
            },
            interaction: InteractionConfig {
                handle_size: Some(14.0),
                ..InteractionConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_and_fields_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[viewport]\nfit_padding = 0.0\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.viewport.fit_padding, Some(0.0));
        assert_eq!(loaded.viewport.zoom_step, Some(DEFAULT_ZOOM_STEP));
        assert_eq!(loaded.history, HistoryConfig::default());
        assert_eq!(loaded.interaction, InteractionConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[history]\ncapacity = \"lots\"\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(dir.clone())).expect("save should work");
        assert!(dir.join(CONFIG_FILE).exists());
    }

    #[test]
    fn default_config_uses_default_constants() {
        let config = Config::default();
        assert_eq!(config.history.capacity, Some(21));
        assert_eq!(config.viewport.layout_settle_ms, Some(300));
        assert_eq!(config.interaction.click_threshold, Some(DEFAULT_CLICK_THRESHOLD));
    }
}
