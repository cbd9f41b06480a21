//! Outline font rendering through `skrifa`
//!
//! A [`Typeface`] holds the bytes of a TrueType/OpenType file and turns
//! text into glyph outlines for the rasterizer. When no face can be
//! loaded the canvas falls back to the built-in bitmap font.

use std::path::Path;

use lcars_core::prelude::*;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{FontRef, MetadataProvider};

/// Font stack tried by [`Typeface::find_system`], most LCARS-like first
pub const LCARS_FONT_STACK: &[&str] = &[
    "LCARS",
    "Swiss911",
    "Antonio-Regular",
    "Antonio",
    "DejaVuSansCondensed",
    "DejaVuSans",
    "LiberationSansNarrow-Regular",
    "LiberationSans-Regular",
];

const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/TTF/",
    "/usr/share/fonts/truetype/",
    "/usr/share/fonts/truetype/dejavu/",
    "/usr/share/fonts/truetype/liberation/",
    "/usr/share/fonts/opentype/",
    "/usr/local/share/fonts/",
    "/Library/Fonts/",
    "/System/Library/Fonts/",
];

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// A loaded font face
#[derive(Clone)]
pub struct Typeface {
    data: Vec<u8>,
    index: u32,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("bytes", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

impl Typeface {
    /// Face `index` of a font file already in memory.
    pub fn from_bytes(data: Vec<u8>, index: u32) -> Result<Self> {
        FontRef::from_index(&data, index)
            .map_err(|e| Error::render(format!("Unreadable font data: {}", e)))?;
        Ok(Self { data, index })
    }

    /// Read the first face of a font file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Reading font {}", path.display()))?;
        let face = Self::from_bytes(data, 0)?;
        debug!("Loaded font {}", path.display());
        Ok(face)
    }

    /// First face of `names` found in the usual system font directories.
    pub fn find_system(names: &[&str]) -> Option<Self> {
        for name in names {
            for dir in FONT_DIRS {
                for ext in FONT_EXTENSIONS {
                    let path = Path::new(dir).join(format!("{}.{}", name, ext));
                    let Ok(data) = std::fs::read(&path) else {
                        continue;
                    };
                    match Self::from_bytes(data, 0) {
                        Ok(face) => {
                            debug!("Using system font {}", path.display());
                            return Some(face);
                        }
                        Err(e) => trace!("Skipping {}: {}", path.display(), e),
                    }
                }
            }
        }
        None
    }

    fn font(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(&self.data, self.index).ok()
    }

    /// `(ascent, descent)` in pixels at `size`; descent is positive.
    fn vertical_metrics(font: &FontRef<'_>, size: f32) -> (f32, f32) {
        let metrics = font.metrics(Size::new(size), LocationRef::default());
        (metrics.ascent, -metrics.descent)
    }

    /// Pixel extent `(width, height)` of a single line of text.
    pub fn text_extent(&self, text: &str, size: f64) -> (i32, i32) {
        let Some(font) = self.font() else {
            return (0, 0);
        };
        let size = size.max(0.0) as f32;
        let charmap = font.charmap();
        let advances = font.glyph_metrics(Size::new(size), LocationRef::default());

        let width: f32 = text
            .chars()
            .map(|ch| {
                let gid = charmap.map(ch).unwrap_or_default();
                advances.advance_width(gid).unwrap_or(size * 0.5)
            })
            .sum();
        let (ascent, descent) = Self::vertical_metrics(&font, size);
        (width.round() as i32, (ascent + descent).round() as i32)
    }

    /// Append the outlines of `text` to `pb`, with the top-left corner of
    /// the line box at `(x, y)`. Returns `false` when nothing was drawn.
    pub fn outline(
        &self,
        text: &str,
        x: f64,
        y: f64,
        size: f64,
        pb: &mut tiny_skia::PathBuilder,
    ) -> bool {
        let Some(font) = self.font() else {
            return false;
        };
        let size = size.max(0.0) as f32;
        if size == 0.0 {
            return false;
        }

        let charmap = font.charmap();
        let outlines = font.outline_glyphs();
        let advances = font.glyph_metrics(Size::new(size), LocationRef::default());
        let (ascent, _) = Self::vertical_metrics(&font, size);

        let mut pen = PathPen {
            pb,
            origin_x: x as f32,
            baseline: y as f32 + ascent,
            drew: false,
        };

        for ch in text.chars() {
            let gid = charmap.map(ch).unwrap_or_default();
            if let Some(glyph) = outlines.get(gid) {
                let settings = DrawSettings::unhinted(Size::new(size), LocationRef::default());
                if let Err(e) = glyph.draw(settings, &mut pen) {
                    trace!("Glyph {:?} not drawn: {}", ch, e);
                }
            }
            pen.origin_x += advances.advance_width(gid).unwrap_or(size * 0.5);
        }
        pen.drew
    }
}

/// Feeds glyph outlines (y up) into a tiny-skia path (y down)
struct PathPen<'a> {
    pb: &'a mut tiny_skia::PathBuilder,
    origin_x: f32,
    baseline: f32,
    drew: bool,
}

impl PathPen<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x, self.baseline - y)
    }
}

impl OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.pb.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.pb.line_to(x, y);
        self.drew = true;
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (x, y) = self.map(x, y);
        self.pb.quad_to(cx0, cy0, x, y);
        self.drew = true;
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (cx1, cy1) = self.map(cx1, cy1);
        let (x, y) = self.map(x, y);
        self.pb.cubic_to(cx0, cy0, cx1, cy1, x, y);
        self.drew = true;
    }

    fn close(&mut self) {
        self.pb.close();
    }
}
