//! Configuration file parsing for the LCARS shell
//!
//! Settings come from `config.toml` in the user config directory (or an
//! explicit path) and are overridden by command-line flags.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, save_settings};
pub use types::*;
