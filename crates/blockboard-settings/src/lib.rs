//! Blockboard Settings Crate
//!
//! Handles editor configuration: canvas size, snapping tolerance and
//! placement behavior, with JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, CanvasSettings, EditorConfig, PlacementPolicy, PlacementSettings,
    SnapSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
