//! Shell state (Model in TEA pattern)

use lcars_core::{DisplayConfig, Theme};
use lcars_render::MainInterface;

/// Lifecycle phase of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellPhase {
    /// Waiting for the first surface configuration
    #[default]
    Initializing,
    /// Surface configured, rendering frames
    Running,
    /// Exit requested; the loop stops at its next iteration
    Quitting,
}

/// Complete shell state
#[derive(Debug, Clone)]
pub struct ShellState {
    pub phase: ShellPhase,

    /// Active palette
    pub theme: Theme,

    /// Current surface size
    pub width: i32,
    pub height: i32,

    /// Refresh rate of the current output mode, millihertz
    pub refresh_mhz: Option<i32>,

    /// Fixed composition for the current surface size
    pub interface: MainInterface,

    /// Last known pointer position
    pub pointer: Option<(f64, f64)>,

    /// Button index under the pointer
    pub hovered: Option<usize>,

    /// Button index that received the last left-button press
    pub pressed: Option<usize>,

    /// Frames presented so far
    pub frames: u64,
}

impl ShellState {
    /// State for `theme` with the configured resolution as the initial
    /// surface size.
    pub fn new(theme: Theme, config: &DisplayConfig) -> Self {
        let (width, height) = config.resolution.surface_size();
        Self {
            phase: ShellPhase::Initializing,
            theme,
            width,
            height,
            refresh_mhz: None,
            interface: MainInterface::new(width, height),
            pointer: None,
            hovered: None,
            pressed: None,
            frames: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == ShellPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = ShellPhase::Quitting;
    }

    /// Store a new surface size and rebuild the composition.
    ///
    /// Returns `false` when either side is not positive (ignored) or the
    /// size is unchanged.
    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        if width <= 0 || height <= 0 {
            return false;
        }
        if self.phase == ShellPhase::Initializing {
            self.phase = ShellPhase::Running;
        }
        if (width, height) == (self.width, self.height) {
            return false;
        }

        self.width = width;
        self.height = height;
        self.interface = MainInterface::new(width, height);
        self.hovered = self.button_under_pointer();
        self.pressed = None;
        self.sync_buttons();
        true
    }

    /// Button index at the last pointer position
    pub fn button_under_pointer(&self) -> Option<usize> {
        let (x, y) = self.pointer?;
        self.interface.button_at(x.floor() as i32, y.floor() as i32)
    }

    /// Push hover/press state into the composition's buttons
    pub fn sync_buttons(&mut self) {
        self.interface.set_button_states(self.hovered, self.pressed);
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(Theme::default(), &DisplayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_uses_configured_size() {
        let config = DisplayConfig::parse("1280x720", 60).unwrap();
        let state = ShellState::new(Theme::new("borg"), &config);
        assert_eq!((state.width, state.height), (1280, 720));
        assert_eq!(state.interface.width(), 1280);
        assert_eq!(state.phase, ShellPhase::Initializing);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_resize_ignores_non_positive() {
        let mut state = ShellState::default();
        assert!(!state.resize(0, 600));
        assert!(!state.resize(800, -1));
        assert_eq!((state.width, state.height), (1920, 1080));
        assert_eq!(state.phase, ShellPhase::Initializing);
    }

    #[test]
    fn test_resize_rebuilds_interface() {
        let mut state = ShellState::default();
        assert!(state.resize(1024, 768));
        assert_eq!(state.interface, MainInterface::new(1024, 768));
        assert_eq!(state.phase, ShellPhase::Running);

        // Same size again is not a change
        assert!(!state.resize(1024, 768));
    }

    #[test]
    fn test_button_under_pointer() {
        let mut state = ShellState::default();
        assert_eq!(state.button_under_pointer(), None);
        state.pointer = Some((25.7, 141.2));
        assert_eq!(state.button_under_pointer(), Some(1));
    }
}
