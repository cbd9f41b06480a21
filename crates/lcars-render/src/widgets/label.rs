//! Text labels

use lcars_core::{Slot, Theme};

use crate::canvas::Canvas;

/// Horizontal anchoring of a label relative to its `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A line of text anchored at `(x, y)`, the top of the text box
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub size: f64,
    pub slot: Slot,
    pub align: TextAlign,
}

impl Label {
    pub fn new(x: i32, y: i32, text: impl Into<String>, size: f64) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            size,
            slot: Slot::Text,
            align: TextAlign::Left,
        }
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Left edge after alignment, given the measured text width
    fn origin_x(&self, text_width: i32) -> i32 {
        match self.align {
            TextAlign::Left => self.x,
            TextAlign::Center => self.x - text_width / 2,
            TextAlign::Right => self.x - text_width,
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, theme: &Theme) {
        let (width, _) = canvas.text_extent(&self.text, self.size);
        let x = self.origin_x(width);
        draw_text(canvas, x, self.y, theme, self.slot, &self.text, self.size);
    }
}

/// Draw `text` in `slot` with its top-left corner at `(x, y)`.
pub fn draw_text(
    canvas: &mut dyn Canvas,
    x: i32,
    y: i32,
    theme: &Theme,
    slot: Slot,
    text: &str,
    size: f64,
) {
    if text.is_empty() {
        return;
    }
    canvas.draw_text(x, y, text, size, theme.rgba(slot));
}
