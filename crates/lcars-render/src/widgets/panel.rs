//! Filled panels

use lcars_core::{CornerRadii, Path, Rect, Slot, Theme};

use crate::canvas::Canvas;

/// Corner radius of every standard panel
pub const PANEL_RADIUS: f64 = 10.0;

/// Outline of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    /// Sharp corners
    Rectangular,
    /// All four corners rounded
    #[default]
    Rounded,
    /// Only the top-left corner rounded, as in an LCARS sidebar sweep
    Elbow,
}

/// A filled region of one theme slot
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub rect: Rect,
    pub slot: Slot,
    pub style: PanelStyle,
    pub radius: f64,
}

impl Panel {
    /// Rounded panel with the standard radius
    pub fn new(rect: Rect, slot: Slot) -> Self {
        Self {
            rect,
            slot,
            style: PanelStyle::Rounded,
            radius: PANEL_RADIUS,
        }
    }

    /// Sharp-cornered panel (frame bands)
    pub fn band(rect: Rect, slot: Slot) -> Self {
        Self {
            style: PanelStyle::Rectangular,
            radius: 0.0,
            ..Self::new(rect, slot)
        }
    }

    pub fn with_style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Radius actually used for drawing
    pub fn effective_radius(&self) -> f64 {
        match self.style {
            PanelStyle::Rectangular => 0.0,
            PanelStyle::Rounded | PanelStyle::Elbow => self.radius,
        }
    }

    pub fn path(&self) -> Path {
        match self.style {
            PanelStyle::Rectangular => Path::rect(self.rect),
            PanelStyle::Rounded => Path::rounded_rect(self.rect, self.radius),
            PanelStyle::Elbow => Path::rounded_rect_corners(
                self.rect,
                CornerRadii {
                    top_left: self.radius,
                    ..CornerRadii::default()
                },
            ),
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, theme: &Theme) {
        let color = theme.rgba(self.slot);
        match self.style {
            PanelStyle::Rectangular => canvas.fill_rect(self.rect, color),
            PanelStyle::Rounded | PanelStyle::Elbow => canvas.fill_path(&self.path(), color),
        }
    }
}

/// Fill `rect` as a rounded panel (radius [`PANEL_RADIUS`]) in `slot`.
pub fn draw_panel(canvas: &mut dyn Canvas, rect: Rect, theme: &Theme, slot: Slot) {
    Panel::new(rect, slot).draw(canvas, theme);
}
