//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    #[error("Invalid resolution '{value}': expected <width>x<height> with positive integers")]
    InvalidResolution { value: String },

    #[error("Unsupported display mode: {mode}")]
    UnsupportedDisplayMode { mode: String },

    // ─────────────────────────────────────────────────────────────
    // Display / Graphics Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to connect to display: {message}")]
    DisplayConnect { message: String },

    #[error("Failed to bind required interface: {interface}")]
    ProtocolBind { interface: String },

    #[error("Failed to initialize graphics context: {message}")]
    GraphicsInit { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn invalid_resolution(value: impl Into<String>) -> Self {
        Self::InvalidResolution {
            value: value.into(),
        }
    }

    pub fn unsupported_display_mode(mode: impl Into<String>) -> Self {
        Self::UnsupportedDisplayMode { mode: mode.into() }
    }

    pub fn display_connect(message: impl Into<String>) -> Self {
        Self::DisplayConnect {
            message: message.into(),
        }
    }

    pub fn protocol_bind(interface: impl Into<String>) -> Self {
        Self::ProtocolBind {
            interface: interface.into(),
        }
    }

    pub fn graphics_init(message: impl Into<String>) -> Self {
        Self::GraphicsInit {
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::ConfigNotFound { .. }
                | Error::UnsupportedDisplayMode { .. }
                | Error::Render { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidResolution { .. }
                | Error::DisplayConnect { .. }
                | Error::ProtocolBind { .. }
                | Error::GraphicsInit { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Log a failing result with a description of the operation.
///
/// The error itself is passed through unchanged so its fatal/recoverable
/// classification survives.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], building the description only on failure
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!(fatal = err.is_fatal(), "{}: {}", f(), err);
            err
        })
    }
}
