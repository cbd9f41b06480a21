//! lcars-app - Shell state and orchestration for the LCARS desktop shell
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! shell state, the display backend boundary with its headless
//! implementation, configuration loading, signal handling and the render
//! loop that ties them together.

pub mod backend;
pub mod config;
pub mod engine;
pub mod handler;
pub mod headless;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use backend::{DisplayBackend, SurfaceEvent};
pub use engine::Shell;
pub use handler::{update, UpdateAction, UpdateResult};
pub use headless::{HeadlessBackend, HeadlessEvent, HeadlessOptions};
pub use message::Message;
pub use state::{ShellPhase, ShellState};
