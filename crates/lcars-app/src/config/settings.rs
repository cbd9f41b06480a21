//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use lcars_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "lcars-desktop";

/// `$XDG_CONFIG_HOME/lcars-desktop/config.toml` (or the platform
/// equivalent), if a config directory exists at all.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or from [`default_config_path`] when `None`.
///
/// A missing file yields defaults. A file that cannot be read or parsed
/// is reported and also yields defaults.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No config directory, using default settings");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write `settings` as TOML, creating parent directories.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }
    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    std::fs::write(path, content).context("Failed to write settings")?;
    debug!("Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SettingsOverrides;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_settings(Some(&dir.path().join("config.toml")));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.display.mode, "starfleet");
        assert_eq!(settings.display.resolution, "1920x1080");
        assert_eq!(settings.display.refresh, 60);
        assert_eq!(settings.headless.frames, 0);
        assert!(settings.headless.snapshot.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[display]
mode = "borg"

[headless]
frames = 5
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.display.mode, "borg");
        assert_eq!(settings.display.resolution, "1920x1080");
        assert_eq!(settings.display.refresh, 60);
        assert_eq!(settings.headless.frames, 5);
    }

    #[test]
    fn test_font_path_from_file_and_cli() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nfont = \"/opt/fonts/LCARS.ttf\"\n").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(
            settings.display.font.as_deref(),
            Some(std::path::Path::new("/opt/fonts/LCARS.ttf"))
        );

        let settings = settings.merge(SettingsOverrides {
            font: Some(PathBuf::from("Antonio.ttf")),
            ..Default::default()
        });
        assert_eq!(settings.display.font, Some(PathBuf::from("Antonio.ttf")));
        assert!(Settings::default().display.font.is_none());
    }

    #[test]
    fn test_invalid_toml_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display\nmode = ").unwrap();
        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[display]\nmode = \"terran\"\nresolution = \"1024x768\"\nrefresh = 75\n",
        )
        .unwrap();

        let settings = load_settings(Some(&path)).merge(SettingsOverrides {
            mode: Some("holodeck".into()),
            refresh: Some(0),
            ..Default::default()
        });

        assert_eq!(settings.display.mode, "holodeck");
        assert_eq!(settings.display.resolution, "1024x768");
        assert_eq!(settings.display.refresh, 0);

        // Zero refresh falls back when the display config is built
        let config = settings.display_config().unwrap();
        assert_eq!(config.refresh_hz, 60);
        assert_eq!(config.resolution.to_string(), "1024x768");
    }

    #[test]
    fn test_malformed_resolution_is_an_error() {
        let settings = Settings::default().merge(SettingsOverrides {
            resolution: Some("1920y1080".into()),
            ..Default::default()
        });
        let err = settings.display_config().unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let settings = Settings::default().merge(SettingsOverrides {
            mode: Some("section31".into()),
            snapshot: Some(dir.path().join("frame.png")),
            ..Default::default()
        });

        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(Some(&path)), settings);
    }

    #[test]
    fn test_default_config_path_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("lcars-desktop/config.toml"));
        }
    }
}
