//! Shell runner - connects the backend and drives the render loop

use std::path::Path;

use lcars_app::config::{load_settings, Settings, SettingsOverrides};
use lcars_app::signals::spawn_signal_handler;
use lcars_app::{HeadlessBackend, HeadlessOptions, Shell, ShellState};
use lcars_core::prelude::*;
use lcars_core::{DisplayConfig, Mode, Theme, SUPPORTED_MODES};
use lcars_render::{MainInterface, Typeface, LCARS_FONT_STACK};
use tokio::sync::mpsc;

/// Capacity of the channel carrying signal-handler messages
const MESSAGE_CHANNEL_CAPACITY: usize = 16;

/// Load the config file and apply command-line overrides.
///
/// An explicit path that does not exist is reported and defaults are used.
pub fn resolve_settings(config_path: Option<&Path>, overrides: SettingsOverrides) -> Settings {
    if let Some(path) = config_path {
        if !path.exists() {
            let err = Error::ConfigNotFound {
                path: path.to_path_buf(),
            };
            warn!("{}", err);
        }
    }
    load_settings(config_path).merge(overrides)
}

/// Build the display config, warning about non-standard sizes.
fn display_config(settings: &Settings) -> Result<DisplayConfig> {
    let config = settings.display_config()?;
    if let Err(e) = config.validate_mode() {
        warn!("{}, continuing anyway", e);
    }
    Ok(config)
}

/// The configured font, else the first installed face of the LCARS
/// stack, else `None` for the bitmap font.
pub fn load_typeface(settings: &Settings) -> Option<Typeface> {
    if let Some(path) = &settings.display.font {
        match Typeface::load(path) {
            Ok(face) => return Some(face),
            Err(e) => warn!("Font {} unusable ({}), searching system fonts", path.display(), e),
        }
    }

    let face = Typeface::find_system(LCARS_FONT_STACK);
    if face.is_none() {
        info!("No outline font found, using the built-in bitmap font");
    }
    face
}

/// Run the shell on the headless backend until it closes or a signal
/// arrives.
pub async fn run_headless(settings: &Settings) -> Result<()> {
    let config = display_config(settings)?;
    let theme = Theme::new(&settings.display.mode);

    info!("═══════════════════════════════════════════════════════");
    info!(
        "LCARS shell: {} at {} @ {} Hz",
        theme.mode(),
        config.resolution,
        config.refresh_hz
    );
    info!("═══════════════════════════════════════════════════════");

    let options = HeadlessOptions {
        max_frames: settings.headless.frames,
        snapshot: settings.headless.snapshot.clone(),
        ..Default::default()
    };
    let backend = HeadlessBackend::connect(config, options)?;

    let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
    let signal_handle = spawn_signal_handler(msg_tx);

    let mut shell = Shell::new(backend, ShellState::new(theme, &config), msg_rx)?;
    shell.set_typeface(load_typeface(settings));
    let result = tokio::task::spawn_blocking(move || shell.run()).await;

    signal_handle.abort();

    match result {
        Ok(run_result) => run_result,
        Err(e) => Err(Error::render(format!("Render loop aborted: {}", e))),
    }
}

/// The resolved main-interface regions as pretty JSON
pub fn dump_layout(settings: &Settings) -> Result<String> {
    let config = display_config(settings)?;
    let (width, height) = config.resolution.surface_size();
    let interface = MainInterface::new(width, height);
    Ok(serde_json::to_string_pretty(&interface.regions())?)
}

/// Theme modes and standard display modes, one per line
pub fn list_modes() -> String {
    let mut out = String::from("Theme modes:\n");
    for (i, mode) in Mode::ALL.iter().enumerate() {
        out.push_str(&format!("  {}  {}\n", i + 1, mode));
    }
    out.push_str("Display modes:\n");
    for mode in SUPPORTED_MODES {
        out.push_str(&format!("  {}\n", mode));
    }
    out
}
