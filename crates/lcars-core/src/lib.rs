//! # lcars-core - Core Domain Types
//!
//! Foundation crate for the LCARS desktop shell. Provides error handling,
//! logging setup, colors, the theme resolver, geometry and display
//! configuration.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Theme (`theme`)
//! - [`Theme`] - Seven color slots resolved from a named mode
//! - [`Mode`] - Closed set of palette presets (starfleet, borg, ...)
//! - [`Slot`] - Semantic color roles (primary, accent, danger, ...)
//!
//! ### Colors (`color`)
//! - [`Rgba`] - Normalized color with hex decoding
//!
//! ### Geometry (`geometry`)
//! - [`Rect`] - Integer layout rectangle
//! - [`Path`] - Backend-neutral fill path (rounded rectangles, elbows)
//! - [`status_fill_width()`] - Saturating fill width for status bars
//!
//! ### Display (`display`)
//! - [`Resolution`] - Parsed `WxH` surface size
//! - [`DisplayConfig`] - Resolution + refresh rate established at startup
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use lcars_core::prelude::*;
//! ```

pub mod color;
pub mod display;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod theme;

/// Prelude for common imports used throughout all LCARS crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use color::Rgba;
pub use display::{
    parse_resolution, DisplayConfig, Resolution, DEFAULT_REFRESH_HZ, DEFAULT_RESOLUTION,
    MAX_SIDE, SUPPORTED_MODES,
};
pub use error::{Error, Result, ResultExt};
pub use geometry::{status_fill_width, CornerRadii, Path, PathCommand, Rect};
pub use theme::{Mode, Slot, Theme, FALLBACK_COLOR};
