//! Headless display backend with NDJSON event output
//!
//! Stands in for a compositor connection: it advertises one output mode,
//! configures the surface at the configured resolution, paces frames at
//! the refresh rate and pings the shell periodically. Every lifecycle
//! change and presented frame is reported as one JSON object per line on
//! stdout.
//!
//! # Example Output
//!
//! ```json
//! {"event":"connected","backend":"headless","width":1920,"height":1080,"refresh_hz":60,"timestamp":1704700001000}
//! {"event":"frame_presented","frame":1,"width":1920,"height":1080,"timestamp":1704700001016}
//! {"event":"closed","frames":3,"timestamp":1704700001050}
//! ```

use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;
use lcars_core::prelude::*;
use lcars_core::DisplayConfig;
use lcars_render::SkiaCanvas;
use serde::Serialize;

use crate::backend::{DisplayBackend, SurfaceEvent};
use crate::handler::UpdateAction;

/// Frames between two compositor pings
pub const PING_INTERVAL_FRAMES: u64 = 120;

/// Most recent events kept for inspection; older ones are dropped
pub const EVENT_HISTORY: usize = 256;

/// Events emitted by the headless backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Backend connected and output advertised
    Connected {
        backend: String,
        width: u32,
        height: u32,
        refresh_hz: u32,
        timestamp: i64,
    },

    /// A frame was uploaded
    FramePresented {
        frame: u64,
        width: u32,
        height: u32,
        timestamp: i64,
    },

    /// Ping sent to the shell
    Ping { serial: u32, timestamp: i64 },

    /// Shell answered a ping
    Pong { serial: u32, timestamp: i64 },

    /// Theme mode switched
    ModeChanged { mode: String, timestamp: i64 },

    /// Sidebar button clicked
    ButtonActivated { label: String, timestamp: i64 },

    /// Frame written to a PNG file
    SnapshotWritten { path: String, timestamp: i64 },

    /// Surface closed
    Closed { frames: u64, timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json).and_then(|_| stdout.flush()) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

/// Behavior of a [`HeadlessBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessOptions {
    /// Close after this many presented frames; 0 runs until quit
    pub max_frames: u64,
    /// Write the final frame (or the first one when unlimited) here
    pub snapshot: Option<PathBuf>,
    /// Sleep one refresh interval between frames
    pub pace: bool,
    /// Print events to stdout
    pub emit: bool,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        Self {
            max_frames: 0,
            snapshot: None,
            pace: true,
            emit: true,
        }
    }
}

/// Display backend without a display server
#[derive(Debug)]
pub struct HeadlessBackend {
    config: DisplayConfig,
    options: HeadlessOptions,
    connected: bool,
    closed: bool,
    presented: u64,
    last_ping_frame: u64,
    next_serial: u32,
    queued: VecDeque<SurfaceEvent>,
    events: VecDeque<HeadlessEvent>,
}

impl HeadlessBackend {
    /// Fails with a display connection error when a surface of the
    /// configured size cannot be allocated.
    pub fn connect(config: DisplayConfig, options: HeadlessOptions) -> Result<Self> {
        let res = config.resolution;
        SkiaCanvas::new(res.width, res.height).map_err(|e| {
            Error::display_connect(format!("headless output {} unavailable: {}", res, e))
        })?;

        info!(
            "Headless backend ready: {} @ {} Hz, max_frames={}",
            res, config.refresh_hz, options.max_frames
        );

        Ok(Self {
            config,
            options,
            connected: false,
            closed: false,
            presented: 0,
            last_ping_frame: 0,
            next_serial: 0,
            queued: VecDeque::new(),
            events: VecDeque::with_capacity(EVENT_HISTORY),
        })
    }

    /// Inject an input event, delivered with the next dispatch
    pub fn queue(&mut self, event: SurfaceEvent) {
        self.queued.push_back(event);
    }

    /// The last [`EVENT_HISTORY`] reported events, oldest first
    pub fn events(&self) -> &VecDeque<HeadlessEvent> {
        &self.events
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    fn record(&mut self, event: HeadlessEvent) {
        if self.options.emit {
            event.emit();
        }
        if self.events.len() == EVENT_HISTORY {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn frame_limit_reached(&self) -> bool {
        self.options.max_frames > 0 && self.presented >= self.options.max_frames
    }

    fn write_snapshot(&mut self, canvas: &SkiaCanvas) -> Result<()> {
        let Some(path) = self.options.snapshot.clone() else {
            return Ok(());
        };
        canvas.save_png(&path)?;
        info!("Snapshot written to {}", path.display());
        self.record(HeadlessEvent::SnapshotWritten {
            path: path.display().to_string(),
            timestamp: HeadlessEvent::now(),
        });
        Ok(())
    }
}

impl DisplayBackend for HeadlessBackend {
    fn name(&self) -> &str {
        "headless"
    }

    fn dispatch(&mut self) -> Result<Vec<SurfaceEvent>> {
        if !self.connected {
            let resolution = self.config.resolution;
            let (surface_width, surface_height) = resolution.surface_size();
            self.connected = true;
            self.record(HeadlessEvent::Connected {
                backend: self.name().to_string(),
                width: resolution.width,
                height: resolution.height,
                refresh_hz: self.config.refresh_hz,
                timestamp: HeadlessEvent::now(),
            });

            let refresh_mhz =
                i32::try_from(u64::from(self.config.refresh_hz) * 1000).unwrap_or(i32::MAX);
            let mut events = vec![
                SurfaceEvent::OutputMode {
                    width: surface_width,
                    height: surface_height,
                    refresh_mhz,
                    current: true,
                },
                SurfaceEvent::Configure {
                    width: surface_width,
                    height: surface_height,
                },
            ];
            events.extend(self.queued.drain(..));
            return Ok(events);
        }

        if self.frame_limit_reached() {
            if !self.closed {
                self.closed = true;
                self.record(HeadlessEvent::Closed {
                    frames: self.presented,
                    timestamp: HeadlessEvent::now(),
                });
            }
            return Ok(vec![SurfaceEvent::Closed]);
        }

        if self.options.pace {
            std::thread::sleep(self.config.frame_interval());
        }

        let mut events: Vec<SurfaceEvent> = self.queued.drain(..).collect();

        if self.presented > 0
            && self.presented % PING_INTERVAL_FRAMES == 0
            && self.last_ping_frame != self.presented
        {
            self.last_ping_frame = self.presented;
            self.next_serial = self.next_serial.wrapping_add(1);
            let serial = self.next_serial;
            self.record(HeadlessEvent::Ping {
                serial,
                timestamp: HeadlessEvent::now(),
            });
            events.push(SurfaceEvent::Ping { serial });
        }

        Ok(events)
    }

    fn pong(&mut self, serial: u32) {
        trace!("Pong {}", serial);
        self.record(HeadlessEvent::Pong {
            serial,
            timestamp: HeadlessEvent::now(),
        });
    }

    fn present(&mut self, canvas: &SkiaCanvas) -> Result<()> {
        if self.closed {
            trace!("Surface closed, dropping frame");
            return Ok(());
        }

        self.presented += 1;
        self.record(HeadlessEvent::FramePresented {
            frame: self.presented,
            width: canvas.width(),
            height: canvas.height(),
            timestamp: HeadlessEvent::now(),
        });

        let last = self.frame_limit_reached();
        let first_of_unlimited = self.options.max_frames == 0 && self.presented == 1;
        if last || first_of_unlimited {
            self.write_snapshot(canvas)?;
        }
        Ok(())
    }

    fn report(&mut self, action: &UpdateAction) {
        let timestamp = HeadlessEvent::now();
        match action {
            UpdateAction::ModeChanged { mode } => self.record(HeadlessEvent::ModeChanged {
                mode: mode.to_string(),
                timestamp,
            }),
            UpdateAction::ButtonActivated { label } => {
                self.record(HeadlessEvent::ButtonActivated {
                    label: label.clone(),
                    timestamp,
                })
            }
            UpdateAction::Pong { .. } | UpdateAction::Resize { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(max_frames: u64) -> HeadlessOptions {
        HeadlessOptions {
            max_frames,
            snapshot: None,
            pace: false,
            emit: false,
        }
    }

    fn backend(resolution: &str, max_frames: u64) -> HeadlessBackend {
        let config = DisplayConfig::parse(resolution, 60).unwrap();
        HeadlessBackend::connect(config, quiet(max_frames)).unwrap()
    }

    #[test]
    fn test_first_dispatch_configures_surface() {
        let mut backend = backend("800x600", 0);
        let events = backend.dispatch().unwrap();
        assert_eq!(
            events,
            vec![
                SurfaceEvent::OutputMode {
                    width: 800,
                    height: 600,
                    refresh_mhz: 60_000,
                    current: true,
                },
                SurfaceEvent::Configure {
                    width: 800,
                    height: 600
                },
            ]
        );
        assert!(matches!(
            backend.events()[0],
            HeadlessEvent::Connected { width: 800, .. }
        ));
    }

    #[test]
    fn test_closes_after_max_frames() {
        let mut backend = backend("64x48", 2);
        let canvas = SkiaCanvas::new(64, 48).unwrap();

        backend.dispatch().unwrap();
        backend.present(&canvas).unwrap();
        assert!(backend.dispatch().unwrap().is_empty());
        backend.present(&canvas).unwrap();

        assert_eq!(backend.dispatch().unwrap(), vec![SurfaceEvent::Closed]);
        assert_eq!(backend.presented(), 2);

        // Frames after close are dropped
        backend.present(&canvas).unwrap();
        assert_eq!(backend.presented(), 2);
        let closed = backend
            .events()
            .iter()
            .filter(|e| matches!(e, HeadlessEvent::Closed { frames: 2, .. }))
            .count();
        assert_eq!(closed, 1);
    }

    #[test]
    fn test_pings_every_interval() {
        let mut backend = backend("32x32", 0);
        let canvas = SkiaCanvas::new(32, 32).unwrap();
        backend.dispatch().unwrap();

        let mut pings = Vec::new();
        for _ in 0..(PING_INTERVAL_FRAMES * 2) {
            backend.present(&canvas).unwrap();
            for event in backend.dispatch().unwrap() {
                if let SurfaceEvent::Ping { serial } = event {
                    pings.push(serial);
                }
            }
        }
        assert_eq!(pings, vec![1, 2]);
    }

    #[test]
    fn test_unlimited_run_keeps_bounded_history() {
        let mut backend = backend("8x8", 0);
        let canvas = SkiaCanvas::new(8, 8).unwrap();
        backend.dispatch().unwrap();

        // Ten minutes at 60 Hz
        for _ in 0..36_000 {
            backend.present(&canvas).unwrap();
            for event in backend.dispatch().unwrap() {
                if let SurfaceEvent::Ping { serial } = event {
                    backend.pong(serial);
                }
            }
        }

        assert_eq!(backend.presented(), 36_000);
        assert_eq!(backend.events().len(), EVENT_HISTORY);
        let frames: Vec<u64> = backend
            .events()
            .iter()
            .filter_map(|e| match e {
                HeadlessEvent::FramePresented { frame, .. } => Some(*frame),
                _ => None,
            })
            .collect();
        assert_eq!(frames.last(), Some(&36_000));
        assert!(frames.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_queued_input_is_delivered() {
        let mut backend = backend("32x32", 0);
        backend.dispatch().unwrap();
        backend.queue(SurfaceEvent::Key {
            code: 1,
            pressed: true,
        });
        assert_eq!(
            backend.dispatch().unwrap(),
            vec![SurfaceEvent::Key {
                code: 1,
                pressed: true
            }]
        );
        assert!(backend.dispatch().unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_written_on_last_frame() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("last.png");
        let config = DisplayConfig::parse("16x16", 60).unwrap();
        let mut backend = HeadlessBackend::connect(
            config,
            HeadlessOptions {
                snapshot: Some(file.clone()),
                ..quiet(2)
            },
        )
        .unwrap();
        let canvas = SkiaCanvas::new(16, 16).unwrap();

        backend.present(&canvas).unwrap();
        assert!(!file.exists());
        backend.present(&canvas).unwrap();
        assert!(file.exists());
        assert!(matches!(
            backend.events().back(),
            Some(HeadlessEvent::SnapshotWritten { .. })
        ));
    }

    #[test]
    fn test_report_records_user_visible_actions() {
        let mut backend = backend("16x16", 0);
        backend.report(&UpdateAction::Resize {
            width: 1,
            height: 1,
        });
        backend.report(&UpdateAction::ButtonActivated {
            label: "SENSORS".into(),
        });
        assert_eq!(backend.events().len(), 1);
    }

    #[test]
    fn test_event_serialization() {
        let event = HeadlessEvent::Closed {
            frames: 3,
            timestamp: 0,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"closed","frames":3,"timestamp":0}"#);

        let json = serde_json::to_string(&HeadlessEvent::error("boom", true)).unwrap();
        assert!(json.contains(r#""event":"error""#));
        assert!(json.contains(r#""fatal":true"#));
    }
}
