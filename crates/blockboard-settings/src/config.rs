//! Configuration management for Blockboard
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (fixed placement region)
//! - Snapping settings (guide tolerance)
//! - Placement settings (padding, default block size, scan policy)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "blockboard";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSettings {
    /// Canvas width in canvas units
    pub width: f64,
    /// Canvas height in canvas units
    pub height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Snap guide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapSettings {
    /// Maximum gap that still counts as aligned
    pub snap_distance: f64,
    /// Whether guides are computed during drags at all
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            snap_distance: 1.5,
            enabled: true,
        }
    }
}

/// What the placement scan does once it runs past the bottom of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementPolicy {
    /// Fail with `LayoutExhausted` when no slot fits inside the canvas
    #[default]
    Bounded,
    /// Keep scanning rows below the canvas (capped, never hangs)
    Unbounded,
}

impl std::fmt::Display for PlacementPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bounded => write!(f, "bounded"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Placement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementSettings {
    /// Gap left between neighbouring candidate slots
    pub padding: f64,
    /// Scan behavior past the canvas bottom
    #[serde(default)]
    pub policy: PlacementPolicy,
    /// Width used by the "add rectangle" action
    pub default_block_width: f64,
    /// Height used by the "add rectangle" action
    pub default_block_height: f64,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            padding: 10.0,
            policy: PlacementPolicy::default(),
            default_block_width: 100.0,
            default_block_height: 50.0,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub snapping: SnapSettings,
    #[serde(default)]
    pub placement: PlacementSettings,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load the config at `path` if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.canvas.width.is_finite() && self.canvas.width > 0.0) {
            return Err(ConfigError::out_of_range("canvas.width", self.canvas.width));
        }
        if !(self.canvas.height.is_finite() && self.canvas.height > 0.0) {
            return Err(ConfigError::out_of_range(
                "canvas.height",
                self.canvas.height,
            ));
        }

        if !(self.snapping.snap_distance.is_finite() && self.snapping.snap_distance > 0.0) {
            return Err(ConfigError::out_of_range(
                "snapping.snap_distance",
                self.snapping.snap_distance,
            ));
        }

        if !(self.placement.padding.is_finite() && self.placement.padding >= 0.0) {
            return Err(ConfigError::out_of_range(
                "placement.padding",
                self.placement.padding,
            ));
        }
        let placement = &self.placement;
        if !(placement.default_block_width.is_finite() && placement.default_block_width > 0.0) {
            return Err(ConfigError::out_of_range(
                "placement.default_block_width",
                placement.default_block_width,
            ));
        }
        if !(placement.default_block_height.is_finite() && placement.default_block_height > 0.0)
        {
            return Err(ConfigError::out_of_range(
                "placement.default_block_height",
                placement.default_block_height,
            ));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Platform config location, e.g. `~/.config/blockboard/config.toml` on Linux
pub fn default_config_path() -> ConfigResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
}
