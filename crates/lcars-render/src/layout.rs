//! The fixed LCARS main interface
//!
//! Every region is placed at a literal offset from the surface edges. The
//! composition is rebuilt from `(width, height)` whenever the surface is
//! configured, so regions never need to be resized individually.

use std::fmt;

use lcars_core::{Rect, Slot, Theme};
use serde::Serialize;

use crate::canvas::Canvas;
use crate::widgets::{Button, ButtonState, Label, Panel, StatusBar, PANEL_RADIUS};

const TOP_BAR_HEIGHT: i32 = 60;
const SIDEBAR_WIDTH: i32 = 200;
const BOTTOM_BAR_HEIGHT: i32 = 60;

const BUTTON_X: i32 = 20;
const BUTTON_TOP: i32 = 80;
const BUTTON_STEP: i32 = 60;
const BUTTON_WIDTH: i32 = 160;
const BUTTON_HEIGHT: i32 = 40;

const STATUS_TOP: i32 = 100;
const STATUS_STEP: i32 = 40;
const STATUS_WIDTH: i32 = 240;
const STATUS_HEIGHT: i32 = 20;

/// Sidebar buttons, top to bottom
const BUTTONS: [(&str, Slot); 7] = [
    ("LCARS MAIN", Slot::Accent),
    ("SYSTEMS", Slot::Accent),
    ("SENSORS", Slot::Accent),
    ("TACTICAL", Slot::Accent),
    ("OPERATIONS", Slot::Accent),
    ("SECURITY", Slot::Warning),
    ("RED ALERT", Slot::Danger),
];

/// Status gauges, top to bottom
const STATUS_BARS: [(f64, Slot); 4] = [
    (0.75, Slot::Accent),
    (0.50, Slot::Accent),
    (0.90, Slot::Accent),
    (0.30, Slot::Warning),
];

/// The main interface as positioned widgets
#[derive(Debug, Clone, PartialEq)]
pub struct MainInterface {
    width: i32,
    height: i32,
    pub bands: Vec<Panel>,
    pub panels: Vec<Panel>,
    pub buttons: Vec<Button>,
    pub labels: Vec<Label>,
    pub status_bars: Vec<StatusBar>,
}

impl MainInterface {
    pub fn new(width: i32, height: i32) -> Self {
        let (w, h) = (width, height);

        let bands = vec![
            Panel::band(Rect::new(0, 0, w, TOP_BAR_HEIGHT), Slot::Primary),
            Panel::band(
                Rect::new(0, TOP_BAR_HEIGHT, SIDEBAR_WIDTH, h - TOP_BAR_HEIGHT),
                Slot::Primary,
            ),
            Panel::band(
                Rect::new(
                    SIDEBAR_WIDTH,
                    h - BOTTOM_BAR_HEIGHT,
                    w - SIDEBAR_WIDTH,
                    BOTTOM_BAR_HEIGHT,
                ),
                Slot::Primary,
            ),
        ];

        let panels = vec![
            Panel::new(Rect::new(w - 300, 80, 280, 200), Slot::Secondary),
            Panel::new(Rect::new(220, 80, w - 540, h - 200), Slot::Accent),
            Panel::new(Rect::new(220, h - 100, 300, 40), Slot::Secondary),
        ];

        let buttons = BUTTONS
            .iter()
            .zip(0..)
            .map(|(&(label, slot), i)| {
                let y = BUTTON_TOP + i * BUTTON_STEP;
                Button::new(
                    Rect::new(BUTTON_X, y, BUTTON_WIDTH, BUTTON_HEIGHT),
                    PANEL_RADIUS,
                    slot,
                    label,
                )
            })
            .collect();

        let labels = vec![
            Label::new(20, 40, "STARFLEET OS", 18.0),
            Label::new(w - 200, 40, "LCARS INTERFACE", 16.0),
        ];

        let status_bars = STATUS_BARS
            .iter()
            .zip(0..)
            .map(|(&(value, slot), i)| {
                let y = STATUS_TOP + i * STATUS_STEP;
                StatusBar::new(
                    Rect::new(w - 280, y, STATUS_WIDTH, STATUS_HEIGHT),
                    value,
                    slot,
                )
            })
            .collect();

        Self {
            width,
            height,
            bands,
            panels,
            buttons,
            labels,
            status_bars,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Index of the button under `(x, y)`
    pub fn button_at(&self, x: i32, y: i32) -> Option<usize> {
        self.buttons.iter().position(|b| b.contains(x, y))
    }

    /// Mark one button hovered and one pressed; pressed wins if both match.
    pub fn set_button_states(&mut self, hovered: Option<usize>, pressed: Option<usize>) {
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.state = if pressed == Some(i) {
                ButtonState::Pressed
            } else if hovered == Some(i) {
                ButtonState::Hover
            } else {
                ButtonState::Normal
            };
        }
    }

    /// Issue every draw call in composition order: bands, panels, buttons,
    /// labels, status bars.
    pub fn draw(&self, canvas: &mut dyn Canvas, theme: &Theme) {
        for band in &self.bands {
            band.draw(canvas, theme);
        }
        for panel in &self.panels {
            panel.draw(canvas, theme);
        }
        for button in &self.buttons {
            button.draw(canvas, theme);
        }
        for label in &self.labels {
            label.draw(canvas, theme);
        }
        for bar in &self.status_bars {
            bar.draw(canvas, theme);
        }
    }

    /// Flattened region list in composition order
    pub fn regions(&self) -> Vec<Region> {
        let panel = |kind: RegionKind, p: &Panel| Region {
            kind,
            rect: p.rect,
            radius: p.effective_radius(),
            slot: p.slot,
            label: None,
            value: None,
        };

        let mut regions: Vec<Region> = self
            .bands
            .iter()
            .map(|p| panel(RegionKind::Band, p))
            .collect();
        regions.extend(self.panels.iter().map(|p| panel(RegionKind::Panel, p)));
        regions.extend(self.buttons.iter().map(|b| Region {
            kind: RegionKind::Button,
            rect: b.rect,
            radius: b.radius,
            slot: b.slot,
            label: Some(b.label.clone()),
            value: None,
        }));
        regions.extend(self.labels.iter().map(|l| Region {
            kind: RegionKind::Label,
            rect: Rect::new(l.x, l.y, 0, 0),
            radius: 0.0,
            slot: l.slot,
            label: Some(l.text.clone()),
            value: None,
        }));
        regions.extend(self.status_bars.iter().map(|s| Region {
            kind: RegionKind::StatusBar,
            rect: s.rect,
            radius: f64::from(s.rect.height / 2),
            slot: s.slot,
            label: s.label.clone(),
            value: Some(s.value()),
        }));
        regions
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Band,
    Panel,
    Button,
    Label,
    StatusBar,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RegionKind::Band => "band",
            RegionKind::Panel => "panel",
            RegionKind::Button => "button",
            RegionKind::Label => "label",
            RegionKind::StatusBar => "status_bar",
        })
    }
}

/// One laid-out region. Labels are anchor points with an empty rect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub kind: RegionKind,
    pub rect: Rect,
    pub radius: f64,
    pub slot: Slot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.rect;
        write!(
            f,
            "{} {} {},{},{},{} r{}",
            self.kind, self.slot, r.x, r.y, r.width, r.height, self.radius
        )?;
        if let Some(label) = &self.label {
            write!(f, " {label:?}")?;
        }
        if let Some(value) = self.value {
            write!(f, " v{value}")?;
        }
        Ok(())
    }
}

/// Draw the main interface for a `width` x `height` surface.
pub fn draw_main_interface(canvas: &mut dyn Canvas, width: i32, height: i32, theme: &Theme) {
    MainInterface::new(width, height).draw(canvas, theme);
}

/// Clear to the `background` slot, then draw `interface`.
pub fn draw_frame(canvas: &mut dyn Canvas, interface: &MainInterface, theme: &Theme) {
    canvas.paint(theme.rgba(Slot::Background));
    interface.draw(canvas, theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, RecordingCanvas};
    use insta::assert_snapshot;

    fn listing(interface: &MainInterface) -> String {
        interface
            .regions()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn snapshot_main_interface_1920x1080() {
        let interface = MainInterface::new(1920, 1080);
        assert_snapshot!("main_interface_1920x1080", listing(&interface));
    }

    #[test]
    fn test_frame_bands_at_1920x1080() {
        let interface = MainInterface::new(1920, 1080);
        let rects: Vec<_> = interface.bands.iter().map(|b| b.rect).collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 1920, 60),
                Rect::new(0, 60, 200, 1020),
                Rect::new(200, 1020, 1720, 60),
            ]
        );
    }

    #[test]
    fn test_layout_follows_surface_size() {
        let interface = MainInterface::new(1280, 720);
        assert_eq!(interface.panels[0].rect, Rect::new(980, 80, 280, 200));
        assert_eq!(interface.panels[1].rect, Rect::new(220, 80, 740, 520));
        assert_eq!(interface.labels[1].x, 1080);
        assert_eq!(interface.status_bars[3].rect, Rect::new(1000, 220, 240, 20));
    }

    #[test]
    fn test_draw_order() {
        let theme = Theme::default();
        let mut canvas = RecordingCanvas::new();
        draw_frame(&mut canvas, &MainInterface::new(1920, 1080), &theme);
        let ops = canvas.into_ops();

        assert_eq!(ops[0], DrawOp::Paint { color: theme.rgba(Slot::Background) });
        assert!(ops[1..4]
            .iter()
            .all(|op| matches!(op, DrawOp::FillRect { color, .. } if *color == theme.rgba(Slot::Primary))));
        assert!(ops[4..7]
            .iter()
            .all(|op| matches!(op, DrawOp::FillPath { .. })));

        // 7 buttons with a label each, then 2 labels
        let texts: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 9);
        assert_eq!(texts[0], "LCARS MAIN");
        assert_eq!(texts[6], "RED ALERT");
        assert_eq!(texts[7], "STARFLEET OS");
        assert_eq!(texts[8], "LCARS INTERFACE");

        // 4 tracks + 4 fills close the frame
        let tail = &ops[ops.len() - 8..];
        assert!(tail.iter().all(|op| matches!(op, DrawOp::FillPath { .. })));
    }

    #[test]
    fn test_draw_main_interface_matches_struct() {
        let theme = Theme::new("terran");
        let mut a = RecordingCanvas::new();
        let mut b = RecordingCanvas::new();
        draw_main_interface(&mut a, 1024, 768, &theme);
        MainInterface::new(1024, 768).draw(&mut b, &theme);
        assert_eq!(a.into_ops(), b.into_ops());
    }

    #[test]
    fn test_button_hit_testing() {
        let interface = MainInterface::new(1920, 1080);
        assert_eq!(interface.button_at(20, 80), Some(0));
        assert_eq!(interface.button_at(100, 459), Some(6));
        // Gap between SYSTEMS and SENSORS
        assert_eq!(interface.button_at(100, 185), None);
        assert_eq!(interface.button_at(500, 500), None);
    }

    #[test]
    fn test_button_states() {
        let mut interface = MainInterface::new(1920, 1080);
        interface.set_button_states(Some(1), Some(2));
        assert_eq!(interface.buttons[1].state, ButtonState::Hover);
        assert_eq!(interface.buttons[2].state, ButtonState::Pressed);

        interface.set_button_states(Some(2), Some(2));
        assert_eq!(interface.buttons[1].state, ButtonState::Normal);
        assert_eq!(interface.buttons[2].state, ButtonState::Pressed);
    }
}
