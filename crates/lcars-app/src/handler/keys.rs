//! Keyboard handling

use lcars_core::Mode;

use crate::input_key::InputKey;
use crate::message::Message;

/// Map a key event to a follow-up message.
///
/// Only presses act. ESC quits; digits 1-5 select the modes in
/// [`Mode::ALL`] order.
pub fn handle_key(key: InputKey, pressed: bool) -> Option<Message> {
    if !pressed {
        return None;
    }

    match key {
        InputKey::Esc => Some(Message::Quit),
        InputKey::Digit(d @ 1..=5) => Mode::ALL
            .get(usize::from(d) - 1)
            .map(|mode| Message::SwitchMode(mode.name().to_string())),
        _ => None,
    }
}
