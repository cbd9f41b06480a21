//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Keyboard handling
//! - `pointer`: Pointer hover, press and button activation

pub(crate) mod keys;
pub(crate) mod pointer;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use lcars_core::Mode;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the render loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Answer a compositor ping
    Pong { serial: u32 },

    /// Reallocate the drawing surface
    Resize { width: u32, height: u32 },

    /// The theme was replaced
    ModeChanged { mode: Mode },

    /// A sidebar button was clicked (pressed and released over it)
    ButtonActivated { label: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the render loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
