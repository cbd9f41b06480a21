//! Main update function - handles state transitions (TEA pattern)

use lcars_core::prelude::*;

use crate::message::Message;
use crate::state::ShellState;

use super::{keys::handle_key, pointer, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut ShellState, message: Message) -> UpdateResult {
    match message {
        Message::Quit | Message::Closed => {
            if !state.should_quit() {
                info!("Shell quitting ({:?})", message);
            }
            state.request_quit();
            UpdateResult::none()
        }

        Message::Configure { width, height } => handle_resize(state, width, height),

        Message::OutputMode {
            width,
            height,
            refresh_mhz,
            current,
        } => {
            if !current {
                trace!("Ignoring non-current output mode {}x{}", width, height);
                return UpdateResult::none();
            }
            state.refresh_mhz = Some(refresh_mhz);
            info!(
                "Output mode {}x{} @ {:.2} Hz",
                width,
                height,
                f64::from(refresh_mhz) / 1000.0
            );
            handle_resize(state, width, height)
        }

        Message::Ping { serial } => UpdateResult::action(UpdateAction::Pong { serial }),

        Message::Key { key, pressed } => match handle_key(key, pressed) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::PointerMotion { x, y } => pointer::handle_motion(state, x, y),

        Message::PointerButton { button, pressed } => {
            pointer::handle_button(state, button, pressed)
        }

        Message::SwitchMode(name) => {
            let mode = state.theme.set_mode(&name);
            if mode.name() == name {
                info!("Theme mode set to {}", mode);
            } else {
                warn!("Unknown theme mode {:?}, using {}", name, mode);
            }
            UpdateResult::action(UpdateAction::ModeChanged { mode })
        }
    }
}

fn handle_resize(state: &mut ShellState, width: i32, height: i32) -> UpdateResult {
    if width <= 0 || height <= 0 {
        debug!("Ignoring surface size {}x{}", width, height);
        return UpdateResult::none();
    }
    if !state.resize(width, height) {
        return UpdateResult::none();
    }

    info!("Surface configured to {}x{}", width, height);
    UpdateResult::action(UpdateAction::Resize {
        width: width.unsigned_abs(),
        height: height.unsigned_abs(),
    })
}
