//! Software rasterizer backed by a `tiny-skia` pixmap

use std::f64::consts::FRAC_PI_2;

use lcars_core::prelude::*;
use lcars_core::{Path, PathCommand, Rect, Rgba};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::canvas::Canvas;
use crate::font;
use crate::typeface::Typeface;

/// A CPU-side RGBA surface
pub struct SkiaCanvas {
    pixmap: Pixmap,
    typeface: Option<Typeface>,
}

impl std::fmt::Debug for SkiaCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkiaCanvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("typeface", &self.typeface.is_some())
            .finish()
    }
}

impl SkiaCanvas {
    /// Allocate a transparent surface of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            Error::graphics_init(format!("cannot allocate a {width}x{height} surface"))
        })?;
        Ok(Self {
            pixmap,
            typeface: None,
        })
    }

    /// Draw text with `typeface`; `None` selects the bitmap font.
    pub fn set_typeface(&mut self, typeface: Option<Typeface>) {
        self.typeface = typeface;
    }

    pub fn typeface(&self) -> Option<&Typeface> {
        self.typeface.as_ref()
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Reallocate the surface. A no-op when the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == self.width() && height == self.height() {
            return Ok(());
        }
        self.pixmap = Self::new(width, height)?.pixmap;
        debug!("Surface resized to {}x{}", width, height);
        Ok(())
    }

    /// Straight-alpha RGBA at `(x, y)`, `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Premultiplied RGBA bytes, row-major
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| Error::render(format!("PNG encoding failed: {e}")))
    }

    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).with_context(|| format!("Writing {}", path.display()))?;
        Ok(())
    }

    fn paint_for(color: Rgba, anti_alias: bool) -> Paint<'static> {
        let [r, g, b, a] = color.to_rgba8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = anti_alias;
        paint
    }
}

/// Convert a clockwise arc into cubic Bézier segments of at most 90°.
fn push_arc(pb: &mut PathBuilder, started: bool, cx: f64, cy: f64, r: f64, start: f64, end: f64) {
    let point = |a: f64| (cx + r * a.cos(), cy + r * a.sin());

    let (sx, sy) = point(start);
    if started {
        pb.line_to(sx as f32, sy as f32);
    } else {
        pb.move_to(sx as f32, sy as f32);
    }

    let sweep = end - start;
    if sweep <= 0.0 || r <= 0.0 {
        return;
    }
    let segments = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / segments as f64;
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let mut a0 = start;
    for _ in 0..segments {
        let a1 = a0 + step;
        let (x0, y0) = point(a0);
        let (x3, y3) = point(a1);
        let c1 = (x0 - k * r * a0.sin(), y0 + k * r * a0.cos());
        let c2 = (x3 + k * r * a1.sin(), y3 - k * r * a1.cos());
        pb.cubic_to(
            c1.0 as f32,
            c1.1 as f32,
            c2.0 as f32,
            c2.1 as f32,
            x3 as f32,
            y3 as f32,
        );
        a0 = a1;
    }
}

fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    let mut started = false;

    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo { x, y } => {
                pb.move_to(x as f32, y as f32);
                started = true;
            }
            PathCommand::LineTo { x, y } => {
                if started {
                    pb.line_to(x as f32, y as f32);
                } else {
                    pb.move_to(x as f32, y as f32);
                    started = true;
                }
            }
            PathCommand::Arc {
                cx,
                cy,
                radius,
                start,
                end,
            } => {
                push_arc(&mut pb, started, cx, cy, radius, start, end);
                started = true;
            }
            PathCommand::Close => {
                pb.close();
                started = false;
            }
        }
    }

    pb.finish()
}

impl Canvas for SkiaCanvas {
    fn paint(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_rgba8();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        if rect.is_empty() {
            return;
        }
        let Some(area) = tiny_skia::Rect::from_xywh(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        ) else {
            return;
        };
        let paint = Self::paint_for(color, false);
        self.pixmap.fill_rect(area, &paint, Transform::identity(), None);
    }

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        let Some(skia_path) = to_skia_path(path) else {
            trace!("Skipping empty path");
            return;
        };
        let paint = Self::paint_for(color, true);
        self.pixmap.fill_path(
            &skia_path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn text_extent(&self, text: &str, size: f64) -> (i32, i32) {
        match &self.typeface {
            Some(face) => face.text_extent(text, size),
            None => font::text_extent(text, size),
        }
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, size: f64, color: Rgba) {
        let mut pb = PathBuilder::new();
        let (ox, oy) = (f64::from(x), f64::from(y));

        let outlined = self
            .typeface
            .as_ref()
            .map(|face| face.outline(text, ox, oy, size, &mut pb));
        match outlined {
            Some(true) => return self.fill_text_path(pb, color),
            Some(false) => return,
            None => {}
        }

        font::for_each_pixel(text, size, |px, py, w, h| {
            if let Some(cell) = tiny_skia::Rect::from_xywh(
                (ox + px) as f32,
                (oy + py) as f32,
                w as f32,
                h as f32,
            ) {
                pb.push_rect(cell);
            }
        });

        self.fill_text_path(pb, color);
    }
}

impl SkiaCanvas {
    fn fill_text_path(&mut self, pb: PathBuilder, color: Rgba) {
        let Some(glyphs) = pb.finish() else {
            return;
        };
        let paint = Self::paint_for(color, true);
        self.pixmap.fill_path(
            &glyphs,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}
