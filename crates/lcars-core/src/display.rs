//! Display configuration: surface resolution and refresh rate

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Resolution used when none is configured
pub const DEFAULT_RESOLUTION: Resolution = Resolution {
    width: 1920,
    height: 1080,
};

/// Refresh rate used when none (or zero) is configured
pub const DEFAULT_REFRESH_HZ: u32 = 60;

/// Standard display modes a physical output is expected to offer
pub const SUPPORTED_MODES: &[&str] = &[
    "1920x1080",
    "1680x1050",
    "1600x900",
    "1440x900",
    "1366x768",
    "1280x1024",
    "1280x800",
    "1280x720",
    "1024x768",
    "800x600",
];

/// Largest accepted side; surface coordinates are `i32`
pub const MAX_SIDE: u32 = i32::MAX as u32;

/// Surface size in pixels. Both sides are always in `1..=MAX_SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(Error::invalid_resolution(format!("{width}x{height}")));
        }
        Ok(Self { width, height })
    }

    /// Size in surface coordinates
    pub fn surface_size(&self) -> (i32, i32) {
        let side = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        (side(self.width), side(self.height))
    }

    /// Whether this is one of [`SUPPORTED_MODES`]
    pub fn is_standard_mode(&self) -> bool {
        let name = self.to_string();
        SUPPORTED_MODES.contains(&name.as_str())
    }
}

impl Default for Resolution {
    fn default() -> Self {
        DEFAULT_RESOLUTION
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_resolution(s)
    }
}

/// Parse `<width>x<height>` (or `X`), both positive decimal integers.
pub fn parse_resolution(value: &str) -> Result<Resolution> {
    let invalid = || Error::invalid_resolution(value);

    let (w, h) = value
        .trim()
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(invalid)?;

    let side = |s: &str| -> Result<u32> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        s.parse::<u32>().map_err(|_| invalid())
    };

    let (width, height) = (side(w)?, side(h)?);
    Resolution::new(width, height).map_err(|_| invalid())
}

/// Surface size and refresh rate established once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayConfig {
    pub resolution: Resolution,
    pub refresh_hz: u32,
}

impl DisplayConfig {
    /// A zero refresh rate falls back to [`DEFAULT_REFRESH_HZ`].
    pub fn new(resolution: Resolution, refresh_hz: u32) -> Self {
        let refresh_hz = if refresh_hz == 0 {
            tracing::warn!(
                "Refresh rate 0 is invalid, using {} Hz",
                DEFAULT_REFRESH_HZ
            );
            DEFAULT_REFRESH_HZ
        } else {
            refresh_hz
        };
        Self {
            resolution,
            refresh_hz,
        }
    }

    /// Parse the resolution string and build the config
    pub fn parse(resolution: &str, refresh_hz: u32) -> Result<Self> {
        Ok(Self::new(parse_resolution(resolution)?, refresh_hz))
    }

    /// Check the resolution against the standard display modes.
    pub fn validate_mode(&self) -> Result<()> {
        if self.resolution.is_standard_mode() {
            Ok(())
        } else {
            Err(Error::unsupported_display_mode(self.resolution.to_string()))
        }
    }

    /// Duration of one frame at the configured refresh rate
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.refresh_hz.max(1)))
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            refresh_hz: DEFAULT_REFRESH_HZ,
        }
    }
}
