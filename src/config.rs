//! Configuration file support for the scenario runner.
//!
//! One JSON document carries the log level, the scroller's behavior settings
//! and the colors of the solid thumb and track resources.

use std::path::Path;

use fastscroller::{Color, ScrollbarResources, ScrollerConfig, SolidPaintable};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show scroller state transitions
    Debug,
    /// Show every animation tick
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Colors of the solid scrollbar resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub thumb_color: Color,
    pub pressed_thumb_color: Color,
    pub track_color: Color,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            thumb_color: Color::rgb(0.6, 0.6, 0.6),
            pressed_thumb_color: Color::rgb(0.3, 0.5, 0.9),
            track_color: Color::new(0.0, 0.0, 0.0, 0.1),
        }
    }
}

impl Appearance {
    /// Build the four resources at `thickness`.
    pub fn resources(&self, thickness: f32) -> ScrollbarResources {
        let thumb = SolidPaintable::new(self.thumb_color, thickness)
            .pressed_color(self.pressed_thumb_color);
        let track = SolidPaintable::new(self.track_color, thickness);
        ScrollbarResources::new(thumb.clone(), track.clone(), thumb, track)
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Scroller behavior and sizing
    #[serde(default)]
    pub scroller: ScrollerConfig,

    #[serde(default)]
    pub appearance: Appearance,
}

impl AppConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            scroller: ScrollerConfig::default(),
            appearance: Appearance::default(),
        }
    }

    /// Serialize configuration to JSON.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(AppError::VersionMismatch {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }
        config.scroller.validate()?;

        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Scrollbar resources sized for the configured thickness.
    pub fn resources(&self) -> ScrollbarResources {
        self.appearance.resources(self.scroller.default_thickness)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}
