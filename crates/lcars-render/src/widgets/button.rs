//! Labeled rounded buttons

use lcars_core::{Path, Rect, Slot, Theme};

use crate::canvas::Canvas;

/// Font size of button labels
pub const BUTTON_FONT_SIZE: f64 = 12.0;

/// Interaction state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    Hover,
    Pressed,
}

impl ButtonState {
    /// Alpha of the `text`-slot overlay drawn over the button body
    fn overlay_alpha(&self) -> Option<f64> {
        match self {
            ButtonState::Normal => None,
            ButtonState::Hover => Some(0.15),
            ButtonState::Pressed => Some(0.30),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub radius: f64,
    pub slot: Slot,
    pub label: String,
    pub state: ButtonState,
}

impl Button {
    pub fn new(rect: Rect, radius: f64, slot: Slot, label: impl Into<String>) -> Self {
        Self {
            rect,
            radius,
            slot,
            label: label.into(),
            state: ButtonState::Normal,
        }
    }

    /// Half-open hit test against the button rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains(x, y)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, theme: &Theme) {
        draw_button(canvas, self.rect, self.radius, theme, self.slot, &self.label);

        if let Some(alpha) = self.state.overlay_alpha() {
            let overlay = theme.rgba(Slot::Text).with_alpha(alpha);
            canvas.fill_path(&Path::rounded_rect(self.rect, self.radius), overlay);
        }
    }
}

/// Fill a rounded button in `slot` and center `label` on it in the `text`
/// slot. Centering uses integer division, matching pixel-snapped layout.
pub fn draw_button(
    canvas: &mut dyn Canvas,
    rect: Rect,
    radius: f64,
    theme: &Theme,
    slot: Slot,
    label: &str,
) {
    canvas.fill_path(&Path::rounded_rect(rect, radius), theme.rgba(slot));

    if label.is_empty() {
        return;
    }
    let (tw, th) = canvas.text_extent(label, BUTTON_FONT_SIZE);
    let x = rect.x + (rect.width - tw) / 2;
    let y = rect.y + (rect.height - th) / 2;
    canvas.draw_text(x, y, label, BUTTON_FONT_SIZE, theme.rgba(Slot::Text));
}
