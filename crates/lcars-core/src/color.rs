//! Normalized RGBA colors decoded from `#RRGGBB` strings

use serde::Serialize;

/// A color with each channel in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque black. Also the decode result for malformed hex strings.
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Decode `#RRGGBB` or `RRGGBB`. Alpha is always 1.0.
    ///
    /// Returns `None` unless exactly six hex digits follow the optional `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let rgb = u32::from_str_radix(digits, 16).ok()?;

        Some(Self {
            r: f64::from((rgb >> 16) & 0xFF) / 255.0,
            g: f64::from((rgb >> 8) & 0xFF) / 255.0,
            b: f64::from(rgb & 0xFF) / 255.0,
            a: 1.0,
        })
    }

    /// Lenient decode used at draw time: malformed input becomes [`Rgba::BLACK`].
    pub fn from_hex_or_black(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or_else(|| {
            tracing::trace!("Malformed color {:?}, substituting black", hex);
            Self::BLACK
        })
    }

    /// Same color with a different alpha, for translucent overlays.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Channels as 8-bit values, rounding to nearest.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}
