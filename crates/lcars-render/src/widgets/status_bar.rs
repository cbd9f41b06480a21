//! Horizontal fill gauges

use lcars_core::{status_fill_width, Path, Rect, Slot, Theme};

use crate::canvas::Canvas;

const LABEL_FONT_SIZE: f64 = 12.0;

/// A pill-shaped gauge showing `value` in `[0, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBar {
    pub rect: Rect,
    value: f64,
    pub slot: Slot,
    pub label: Option<String>,
}

impl StatusBar {
    pub fn new(rect: Rect, value: f64, slot: Slot) -> Self {
        let mut bar = Self {
            rect,
            value: 0.0,
            slot,
            label: None,
        };
        bar.set_value(value);
        bar
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Store `value` clamped into `[0, 1]`. NaN stores 0.
    pub fn set_value(&mut self, value: f64) {
        self.value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
    }

    /// Width of the filled part in pixels
    pub fn fill_width(&self) -> i32 {
        status_fill_width(self.rect.width, self.value)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, theme: &Theme) {
        draw_status_bar(canvas, self.rect, self.value, theme, self.slot);

        if let Some(label) = self.label.as_deref().filter(|l| !l.is_empty()) {
            let (_, th) = canvas.text_extent(label, LABEL_FONT_SIZE);
            let x = self.rect.x + self.rect.height / 2;
            let y = self.rect.y + (self.rect.height - th) / 2;
            canvas.draw_text(x, y, label, LABEL_FONT_SIZE, theme.rgba(Slot::Text));
        }
    }
}

/// Draw the `background` track, then the filled part in `slot`.
///
/// Both use radius `height / 2`. The fill is skipped entirely when its
/// width comes out as 0.
pub fn draw_status_bar(canvas: &mut dyn Canvas, rect: Rect, value: f64, theme: &Theme, slot: Slot) {
    let radius = f64::from(rect.height / 2);
    canvas.fill_path(
        &Path::rounded_rect(rect, radius),
        theme.rgba(Slot::Background),
    );

    let fill = status_fill_width(rect.width, value);
    if fill > 0 {
        let filled = Rect::new(rect.x, rect.y, fill, rect.height);
        canvas.fill_path(&Path::rounded_rect(filled, radius), theme.rgba(slot));
    }
}
