//! Pointer hover, press and button activation

use lcars_core::prelude::*;

use crate::input_key::BTN_LEFT;
use crate::state::ShellState;

use super::{UpdateAction, UpdateResult};

pub fn handle_motion(state: &mut ShellState, x: f64, y: f64) -> UpdateResult {
    state.pointer = Some((x, y));
    let hovered = state.button_under_pointer();
    if hovered != state.hovered {
        state.hovered = hovered;
        state.sync_buttons();
    }
    UpdateResult::none()
}

/// Left press arms the button under the pointer; release over the same
/// button activates it. Other buttons are ignored.
pub fn handle_button(state: &mut ShellState, button: u32, pressed: bool) -> UpdateResult {
    if button != BTN_LEFT {
        trace!("Ignoring pointer button {:#x}", button);
        return UpdateResult::none();
    }

    let under = state.button_under_pointer();

    if pressed {
        state.pressed = under;
        state.sync_buttons();
        return UpdateResult::none();
    }

    let armed = state.pressed.take();
    state.sync_buttons();

    match armed {
        Some(index) if under == Some(index) => {
            let label = state.interface.buttons[index].label.clone();
            info!("Button activated: {}", label);
            UpdateResult::action(UpdateAction::ButtonActivated { label })
        }
        _ => UpdateResult::none(),
    }
}
