//! Theme resolver: named modes mapped to seven semantic color slots.
//!
//! Internal callers address colors through the closed [`Slot`] enum. The
//! string-keyed lookups ([`Theme::color_of`], [`Theme::rgba_of`]) exist for
//! externally supplied slot names and fall back to opaque black.

use std::fmt;

use serde::Serialize;

use crate::color::Rgba;

/// Hex color returned for unrecognized slot names
pub const FALLBACK_COLOR: &str = "#000000";

// ─────────────────────────────────────────────────────────────────
// Mode
// ─────────────────────────────────────────────────────────────────

/// Palette preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Starfleet,
    Section31,
    Borg,
    Terran,
    Holodeck,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Starfleet,
        Mode::Section31,
        Mode::Borg,
        Mode::Terran,
        Mode::Holodeck,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Starfleet => "starfleet",
            Mode::Section31 => "section31",
            Mode::Borg => "borg",
            Mode::Terran => "terran",
            Mode::Holodeck => "holodeck",
        }
    }

    /// Exact, case-sensitive match against the known mode names.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Like [`Mode::parse`] but unknown names (including empty) resolve to
    /// [`Mode::Starfleet`].
    pub fn resolve(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    fn palette(&self) -> [&'static str; 7] {
        // primary, secondary, accent, background, text, warning, danger
        match self {
            Mode::Starfleet => [
                "#CC99CC", "#9999CC", "#FF9900", "#000000", "#FFFFFF", "#FFCC99", "#CC6666",
            ],
            Mode::Section31 => [
                "#333333", "#1a1a1a", "#666666", "#000000", "#cccccc", "#990000", "#ff0000",
            ],
            Mode::Borg => [
                "#00FF00", "#008800", "#004400", "#000000", "#00FF00", "#FFFF00", "#FF0000",
            ],
            Mode::Terran => [
                "#FFD700", "#8B4513", "#FF6347", "#000000", "#FFD700", "#FF4500", "#DC143C",
            ],
            Mode::Holodeck => [
                "#00BFFF", "#87CEEB", "#B0E0E6", "#001133", "#FFFFFF", "#FFD700", "#FF6347",
            ],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────
// Slot
// ─────────────────────────────────────────────────────────────────

/// Semantic color role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
    Warning,
    Danger,
}

impl Slot {
    pub const ALL: [Slot; 7] = [
        Slot::Primary,
        Slot::Secondary,
        Slot::Accent,
        Slot::Background,
        Slot::Text,
        Slot::Warning,
        Slot::Danger,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Slot::Primary => "primary",
            Slot::Secondary => "secondary",
            Slot::Accent => "accent",
            Slot::Background => "background",
            Slot::Text => "text",
            Slot::Warning => "warning",
            Slot::Danger => "danger",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────

/// A fully populated palette. Every slot always holds a hex string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    mode: Mode,
    colors: [String; 7],
}

impl Theme {
    /// Build the theme for `mode`. Unknown names resolve to starfleet.
    pub fn new(mode: &str) -> Self {
        let resolved = Mode::resolve(mode);
        if resolved.name() != mode {
            tracing::warn!(
                "Unknown theme mode {:?}, using {}",
                mode,
                resolved.name()
            );
        }
        Self::from_mode(resolved)
    }

    pub fn from_mode(mode: Mode) -> Self {
        Self {
            mode,
            colors: mode.palette().map(String::from),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Hex string stored in `slot`
    pub fn color(&self, slot: Slot) -> &str {
        &self.colors[slot.index()]
    }

    /// Hex string for an externally supplied slot name, `#000000` if unknown.
    pub fn color_of(&self, name: &str) -> &str {
        Slot::from_name(name)
            .map(|slot| self.color(slot))
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Decoded slot color; malformed hex decodes to opaque black.
    pub fn rgba(&self, slot: Slot) -> Rgba {
        Rgba::from_hex_or_black(self.color(slot))
    }

    /// Decoded color for an externally supplied slot name.
    pub fn rgba_of(&self, name: &str) -> Rgba {
        Rgba::from_hex_or_black(self.color_of(name))
    }

    /// Replace every slot with the palette of `mode`.
    ///
    /// Returns the mode actually applied after fallback.
    pub fn set_mode(&mut self, mode: &str) -> Mode {
        *self = Self::from_mode(Mode::resolve(mode));
        self.mode
    }

    /// `(slot, hex)` pairs in slot order
    pub fn slots(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.color(slot)))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(Mode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_every_mode_populates_seven_slots() {
        for mode in Mode::ALL {
            let theme = Theme::new(mode.name());
            assert_eq!(theme.mode(), mode);
            assert_eq!(theme.slots().count(), 7);
            for (slot, hex) in theme.slots() {
                assert!(!hex.is_empty(), "{mode} {slot} is empty");
                assert!(Rgba::from_hex(hex).is_some(), "{mode} {slot} = {hex}");
            }
        }
    }

    #[test]
    fn test_unknown_mode_equals_starfleet() {
        let starfleet = Theme::new("starfleet");
        for name in ["", "klingon", "STARFLEET", "borg "] {
            let theme = Theme::new(name);
            for slot in Slot::ALL {
                assert_eq!(theme.color(slot), starfleet.color(slot), "{name:?} {slot}");
            }
        }
    }

    #[test]
    fn test_starfleet_decodes_documented_values() {
        let theme = Theme::new("starfleet");
        let expected = [
            (Slot::Primary, (0.8, 0.6, 0.8)),
            (Slot::Secondary, (0.6, 0.6, 0.8)),
            (Slot::Accent, (1.0, 0.6, 0.0)),
            (Slot::Background, (0.0, 0.0, 0.0)),
            (Slot::Text, (1.0, 1.0, 1.0)),
            (Slot::Warning, (1.0, 0.8, 0.6)),
            (Slot::Danger, (0.8, 0.4, 0.4)),
        ];
        for (slot, (r, g, b)) in expected {
            let c = theme.rgba_of(slot.name());
            assert!(approx(c.r, r), "{slot} r={}", c.r);
            assert!(approx(c.g, g), "{slot} g={}", c.g);
            assert!(approx(c.b, b), "{slot} b={}", c.b);
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn test_unknown_slot_name_is_black() {
        let theme = Theme::new("borg");
        assert_eq!(theme.color_of("nonexistent-slot"), "#000000");
        assert_eq!(theme.color_of(""), "#000000");
        assert_eq!(theme.rgba_of("nonexistent-slot"), Rgba::BLACK);
    }

    #[test]
    fn test_set_mode_replaces_all_slots() {
        let mut theme = Theme::new("holodeck");
        let before = theme.clone();

        let applied = theme.set_mode("borg");

        assert_eq!(applied, Mode::Borg);
        assert_eq!(theme.color_of("primary"), "#00FF00");
        assert_eq!(theme, Theme::from_mode(Mode::Borg));
        for slot in Slot::ALL {
            assert_ne!(theme.color(slot), before.color(slot), "{slot} survived");
        }
    }

    #[test]
    fn test_set_mode_unknown_falls_back() {
        let mut theme = Theme::new("terran");
        assert_eq!(theme.set_mode("mirror"), Mode::Starfleet);
        assert_eq!(theme.color(Slot::Primary), "#CC99CC");
    }

    #[test]
    fn test_slot_names_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_name(slot.name()), Some(slot));
        }
        assert_eq!(Slot::from_name("Primary"), None);
    }

    #[test]
    fn test_mode_parse_is_strict() {
        assert_eq!(Mode::parse("section31"), Some(Mode::Section31));
        assert_eq!(Mode::parse("Section31"), None);
        assert_eq!(Mode::resolve("Section31"), Mode::Starfleet);
    }
}
