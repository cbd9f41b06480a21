//! Display backend boundary
//!
//! A backend owns the connection to the display server. Protocol callbacks
//! are collected as [`SurfaceEvent`]s and handed to the shell in batches by
//! [`DisplayBackend::dispatch`].

use lcars_core::Result;
use lcars_render::SkiaCanvas;

use crate::handler::UpdateAction;

/// One display-server callback
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// The compositor proposed a surface size
    Configure { width: i32, height: i32 },
    /// An output advertised a mode; `refresh_mhz` is in millihertz
    OutputMode {
        width: i32,
        height: i32,
        refresh_mhz: i32,
        current: bool,
    },
    /// Liveness check that must be answered with [`DisplayBackend::pong`]
    Ping { serial: u32 },
    /// Keyboard key by evdev code
    Key { code: u32, pressed: bool },
    /// Pointer position in surface coordinates
    PointerMotion { x: f64, y: f64 },
    /// Pointer button by evdev code
    PointerButton { button: u32, pressed: bool },
    /// The surface was closed by the compositor
    Closed,
}

/// Connection to a display server
pub trait DisplayBackend {
    /// Short backend name for logs
    fn name(&self) -> &str;

    /// Wait for the next batch of protocol events.
    ///
    /// Blocks for at most one refresh interval. An empty batch is a frame
    /// tick with nothing to report.
    fn dispatch(&mut self) -> Result<Vec<SurfaceEvent>>;

    /// Answer a [`SurfaceEvent::Ping`]
    fn pong(&mut self, serial: u32);

    /// Upload a finished frame
    fn present(&mut self, canvas: &SkiaCanvas) -> Result<()>;

    /// Observe an action produced by the update function
    fn report(&mut self, _action: &UpdateAction) {}
}
