//! LCARS desktop shell library
//!
//! Startup wiring for the `lcars` binary: settings resolution, the
//! headless render run and the inspection commands.

pub mod runner;

// Re-export main entry points
pub use runner::{dump_layout, list_modes, load_typeface, resolve_settings, run_headless};
