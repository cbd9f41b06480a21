//! Drawing context abstraction
//!
//! The rendering backend (rasterizer, GPU upload) is an external
//! collaborator. Widgets only ever talk to [`Canvas`].

use lcars_core::{Path, Rect, Rgba};
use serde::Serialize;

use crate::font;

/// Target of all LCARS drawing calls
pub trait Canvas {
    /// Fill the whole surface
    fn paint(&mut self, color: Rgba);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Fill a closed path with the non-zero rule
    fn fill_path(&mut self, path: &Path, color: Rgba);

    /// Pixel extent `(width, height)` of `text` at `size`
    fn text_extent(&self, text: &str, size: f64) -> (i32, i32) {
        font::text_extent(text, size)
    }

    /// Draw `text` with its top-left corner at `(x, y)`
    fn draw_text(&mut self, x: i32, y: i32, text: &str, size: f64, color: Rgba);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Paint {
        color: Rgba,
    },
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    FillPath {
        path: Path,
        color: Rgba,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        size: f64,
        color: Rgba,
    },
}

/// Canvas that records calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl Canvas for RecordingCanvas {
    fn paint(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Paint { color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        self.ops.push(DrawOp::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str, size: f64, color: Rgba) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_keeps_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.paint(Rgba::BLACK);
        canvas.fill_rect(Rect::new(0, 0, 10, 10), Rgba::BLACK);
        canvas.draw_text(1, 2, "OK", 12.0, Rgba::BLACK);

        let ops = canvas.into_ops();
        assert_eq!(ops.len(), 3);
        assert!(matches!(ops[0], DrawOp::Paint { .. }));
        assert!(matches!(ops[1], DrawOp::FillRect { .. }));
        assert!(matches!(&ops[2], DrawOp::Text { text, .. } if text == "OK"));
    }

    #[test]
    fn test_draw_op_serializes_with_tag() {
        let op = DrawOp::FillRect {
            rect: Rect::new(0, 0, 1920, 60),
            color: Rgba::BLACK,
        };
        let json = serde_json::to_string(&op).unwrap();
        assert!(json.contains(r#""op":"fill_rect""#));
        assert!(json.contains(r#""width":1920"#));
    }
}
