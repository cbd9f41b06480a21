//! Message types for the shell (TEA pattern)

use crate::backend::SurfaceEvent;
use crate::input_key::InputKey;

/// All possible messages in the shell
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Compositor proposed a surface size
    Configure { width: i32, height: i32 },

    /// Output advertised a mode
    OutputMode {
        width: i32,
        height: i32,
        refresh_mhz: i32,
        current: bool,
    },

    /// Compositor liveness ping
    Ping { serial: u32 },

    /// Keyboard key press or release
    Key { key: InputKey, pressed: bool },

    /// Pointer moved to surface coordinates
    PointerMotion { x: f64, y: f64 },

    /// Pointer button press or release, by evdev code
    PointerButton { button: u32, pressed: bool },

    /// Switch the theme to the named mode
    SwitchMode(String),

    /// Surface closed by the compositor
    Closed,

    /// Quit without further input (ESC, signal handler)
    Quit,
}

impl From<SurfaceEvent> for Message {
    fn from(event: SurfaceEvent) -> Self {
        match event {
            SurfaceEvent::Configure { width, height } => Message::Configure { width, height },
            SurfaceEvent::OutputMode {
                width,
                height,
                refresh_mhz,
                current,
            } => Message::OutputMode {
                width,
                height,
                refresh_mhz,
                current,
            },
            SurfaceEvent::Ping { serial } => Message::Ping { serial },
            SurfaceEvent::Key { code, pressed } => Message::Key {
                key: InputKey::from_evdev(code),
                pressed,
            },
            SurfaceEvent::PointerMotion { x, y } => Message::PointerMotion { x, y },
            SurfaceEvent::PointerButton { button, pressed } => {
                Message::PointerButton { button, pressed }
            }
            SurfaceEvent::Closed => Message::Closed,
        }
    }
}
