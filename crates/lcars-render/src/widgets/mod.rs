//! LCARS widget primitives
//!
//! Each primitive exists twice: as a free `draw_*` function taking the
//! theme and slot explicitly, and as a widget struct that owns those
//! arguments for the layout and for hit-testing.

mod button;
mod label;
mod panel;
mod status_bar;

pub use button::{draw_button, Button, ButtonState, BUTTON_FONT_SIZE};
pub use label::{draw_text, Label, TextAlign};
pub use panel::{draw_panel, Panel, PanelStyle, PANEL_RADIUS};
pub use status_bar::{draw_status_bar, StatusBar};
