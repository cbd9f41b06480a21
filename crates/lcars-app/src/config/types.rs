//! Configuration types

use std::path::PathBuf;

use lcars_core::{DisplayConfig, Result, DEFAULT_REFRESH_HZ};
use serde::{Deserialize, Serialize};

/// Settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub headless: HeadlessSettings,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplaySettings {
    /// Theme mode name; unknown names fall back to starfleet
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Surface size as `<width>x<height>`
    #[serde(default = "default_resolution")]
    pub resolution: String,

    /// Refresh rate in Hz; 0 means the default
    #[serde(default = "default_refresh")]
    pub refresh: u32,

    /// Font file for labels; unset searches the system for an LCARS-like face
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            resolution: default_resolution(),
            refresh: default_refresh(),
            font: None,
        }
    }
}

fn default_mode() -> String {
    "starfleet".to_string()
}

fn default_resolution() -> String {
    "1920x1080".to_string()
}

fn default_refresh() -> u32 {
    DEFAULT_REFRESH_HZ
}

/// Headless backend settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeadlessSettings {
    /// Frames to present before closing; 0 runs until interrupted
    #[serde(default)]
    pub frames: u64,

    /// PNG file receiving the last presented frame
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

/// Values given on the command line. `None` keeps the file/default value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub mode: Option<String>,
    pub resolution: Option<String>,
    pub refresh: Option<u32>,
    pub frames: Option<u64>,
    pub snapshot: Option<PathBuf>,
    pub font: Option<PathBuf>,
}

impl Settings {
    /// Apply command-line overrides on top of these settings
    pub fn merge(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(mode) = overrides.mode {
            self.display.mode = mode;
        }
        if let Some(resolution) = overrides.resolution {
            self.display.resolution = resolution;
        }
        if let Some(refresh) = overrides.refresh {
            self.display.refresh = refresh;
        }
        if let Some(frames) = overrides.frames {
            self.headless.frames = frames;
        }
        if overrides.snapshot.is_some() {
            self.headless.snapshot = overrides.snapshot;
        }
        if overrides.font.is_some() {
            self.display.font = overrides.font;
        }
        self
    }

    /// Parse the display section. A malformed resolution is an error.
    pub fn display_config(&self) -> Result<DisplayConfig> {
        DisplayConfig::parse(&self.display.resolution, self.display.refresh)
    }
}
