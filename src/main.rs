//! LCARS desktop shell - software-rendered LCARS panel interface
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use lcars_app::config::SettingsOverrides;
use lcars_app::HeadlessEvent;
use lcars_core::prelude::*;

/// LCARS desktop shell
#[derive(Parser, Debug)]
#[command(name = "lcars")]
#[command(about = "An LCARS-styled desktop shell", long_about = None)]
struct Args {
    /// Theme mode (starfleet, section31, borg, terran, holodeck)
    #[arg(long)]
    mode: Option<String>,

    /// Surface size as <width>x<height>
    #[arg(long, value_name = "WxH")]
    resolution: Option<String>,

    /// Refresh rate in Hz (0 uses 60)
    #[arg(long, value_name = "HZ")]
    refresh: Option<u32>,

    /// Settings file (default: $XDG_CONFIG_HOME/lcars-desktop/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Close after presenting this many frames (0 runs until interrupted)
    #[arg(long, value_name = "N")]
    frames: Option<u64>,

    /// Write the last presented frame as PNG
    #[arg(long, value_name = "PNG")]
    snapshot: Option<PathBuf>,

    /// TrueType/OpenType font for labels (default: system LCARS-like face)
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Print the resolved layout regions as JSON and exit
    #[arg(long)]
    dump_layout: bool,

    /// Print the theme and display modes and exit
    #[arg(long)]
    list_modes: bool,
}

/// Flags taking a value
const VALUE_FLAGS: &[&str] = &[
    "--mode",
    "--resolution",
    "--refresh",
    "--config",
    "--frames",
    "--snapshot",
    "--font",
];

/// Flags without a value
const SWITCHES: &[&str] = &["--dump-layout", "--list-modes", "--help", "-h"];

/// Reduce the command line to the flags [`Args`] understands.
///
/// Unknown tokens are skipped one by one and parsing continues after
/// them. A known flag whose value is missing or unparsable is dropped so
/// its default applies.
fn known_args<I>(argv: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut argv = argv.into_iter().peekable();
    let mut kept: Vec<String> = argv.next().into_iter().collect();

    while let Some(token) = argv.next() {
        if SWITCHES.contains(&token.as_str()) {
            kept.push(token);
            continue;
        }

        if let Some((flag, value)) = token.split_once('=') {
            if VALUE_FLAGS.contains(&flag) && value_is_valid(flag, value) {
                kept.push(token);
            }
            continue;
        }

        if !VALUE_FLAGS.contains(&token.as_str()) {
            continue;
        }
        let Some(value) = argv.next_if(|next| !next.starts_with("--")) else {
            continue;
        };
        if value_is_valid(&token, &value) {
            // Joined so clap never reads a value such as "-h" as a flag
            kept.push(format!("{token}={value}"));
        }
    }

    kept
}

fn value_is_valid(flag: &str, value: &str) -> bool {
    match flag {
        "--refresh" => value.parse::<u32>().is_ok(),
        "--frames" => value.parse::<u64>().is_ok(),
        _ => true,
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse_from(known_args(std::env::args()));

    if let Err(e) = lcars_core::logging::init() {
        eprintln!("Warning: file logging unavailable: {}", e);
    }

    if args.list_modes {
        print!("{}", lcars_desktop::list_modes());
        return Ok(());
    }

    let settings = lcars_desktop::resolve_settings(
        args.config.as_deref(),
        SettingsOverrides {
            mode: args.mode,
            resolution: args.resolution,
            refresh: args.refresh,
            frames: args.frames,
            snapshot: args.snapshot,
            font: args.font,
        },
    );

    let result = if args.dump_layout {
        lcars_desktop::dump_layout(&settings).map(|json| println!("{}", json))
    } else {
        lcars_desktop::run_headless(&settings).await
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("lcars: {}", e);
        if !args.dump_layout {
            HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
        }
        std::process::exit(1);
    }

    info!("LCARS shell exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        let argv = std::iter::once("lcars")
            .chain(argv.iter().copied())
            .map(String::from);
        Args::parse_from(known_args(argv))
    }

    #[test]
    fn test_unknown_flag_first() {
        let args = parse(&["--fullscreen", "--mode", "borg"]);
        assert_eq!(args.mode.as_deref(), Some("borg"));
    }

    #[test]
    fn test_unknown_flag_last() {
        let args = parse(&["--mode", "borg", "--fullscreen"]);
        assert_eq!(args.mode.as_deref(), Some("borg"));
        assert!(!args.dump_layout);
    }

    #[test]
    fn test_unknown_flag_between_known_flags() {
        let args = parse(&[
            "--resolution",
            "1280x720",
            "--verbose",
            "--refresh",
            "75",
            "--dump-layout",
        ]);
        assert_eq!(args.resolution.as_deref(), Some("1280x720"));
        assert_eq!(args.refresh, Some(75));
        assert!(args.dump_layout);
    }

    #[test]
    fn test_missing_value_keeps_default() {
        let args = parse(&["--mode", "terran", "--resolution"]);
        assert_eq!(args.mode.as_deref(), Some("terran"));
        assert_eq!(args.resolution, None);

        let args = parse(&["--mode", "--list-modes"]);
        assert_eq!(args.mode, None);
        assert!(args.list_modes);
    }

    #[test]
    fn test_unparsable_number_keeps_default() {
        let args = parse(&["--refresh", "fast", "--frames=3"]);
        assert_eq!(args.refresh, None);
        assert_eq!(args.frames, Some(3));
    }

    #[test]
    fn test_unknown_value_is_skipped() {
        let args = parse(&["--output", "HDMI-1", "--mode", "section31"]);
        assert_eq!(args.mode.as_deref(), Some("section31"));
        assert_eq!(args.font, None);
    }
}
