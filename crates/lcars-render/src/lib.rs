//! lcars-render - LCARS drawing for the desktop shell
//!
//! Everything here draws through the [`Canvas`] trait, so the same widgets
//! and layout feed both the tiny-skia rasterizer and the draw-op recorder
//! used by tests. `--dump-layout` prints [`MainInterface::regions`].

pub mod canvas;
pub mod font;
pub mod layout;
pub mod skia;
pub mod typeface;
pub mod widgets;

// Re-export main entry points
pub use canvas::{Canvas, DrawOp, RecordingCanvas};
pub use layout::{draw_frame, draw_main_interface, MainInterface, Region, RegionKind};
pub use skia::SkiaCanvas;
pub use typeface::{Typeface, LCARS_FONT_STACK};
pub use widgets::{
    draw_button, draw_panel, draw_status_bar, draw_text, Button, ButtonState, Label, Panel,
    PanelStyle, StatusBar, TextAlign,
};
