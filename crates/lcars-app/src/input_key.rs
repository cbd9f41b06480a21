//! Abstract input key, decoded from Linux evdev key codes.
//!
//! Display protocols deliver raw evdev codes. Decoding them here keeps the
//! update function independent of any protocol client library.

/// evdev `KEY_ESC`
pub const KEY_ESC: u32 = 1;
/// evdev `KEY_1`; `KEY_2` .. `KEY_9` follow consecutively
pub const KEY_1: u32 = 2;
/// evdev `KEY_9`
pub const KEY_9: u32 = 10;
/// evdev `KEY_0`
pub const KEY_0: u32 = 11;

/// evdev `BTN_LEFT`
pub const BTN_LEFT: u32 = 0x110;

/// Keyboard key as the shell understands it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Escape key
    Esc,
    /// Number row digit 0-9
    Digit(u8),
    /// Any other key, by evdev code
    Other(u32),
}

impl InputKey {
    pub fn from_evdev(code: u32) -> Self {
        match code {
            KEY_ESC => InputKey::Esc,
            KEY_1..=KEY_9 => InputKey::Digit((code - KEY_1 + 1) as u8),
            KEY_0 => InputKey::Digit(0),
            other => InputKey::Other(other),
        }
    }
}
