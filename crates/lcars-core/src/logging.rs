//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "LCARS_LOG";

const DEFAULT_FILTER: &str = "lcars=info,lcars_core=info,lcars_render=info,lcars_app=info,warn";

const LOG_FILE_NAME: &str = "lcars.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/lcars-desktop/logs/`. Stdout stays
/// free for headless NDJSON output.
/// Log level is controlled by the `LCARS_LOG` environment variable.
///
/// # Examples
/// ```bash
/// LCARS_LOG=debug lcars --mode borg
/// LCARS_LOG=trace lcars --frames 10
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via LCARS_LOG
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("LCARS desktop shell starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Directory receiving the daily-rotated `lcars.log.<date>` files
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("lcars-desktop").join("logs")
}
