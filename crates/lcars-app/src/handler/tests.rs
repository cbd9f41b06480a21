//! Tests for handler module

use super::*;
use crate::input_key::{InputKey, BTN_LEFT};
use crate::message::Message;
use crate::state::{ShellPhase, ShellState};
use lcars_core::{Mode, Slot};

/// Run a message and any follow-up messages, collecting actions
fn run(state: &mut ShellState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn press(key: InputKey) -> Message {
    Message::Key { key, pressed: true }
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = ShellState::default();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, ShellPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_closed_quits() {
    let mut state = ShellState::default();
    update(&mut state, Message::Closed);
    assert!(state.should_quit());
}

#[test]
fn test_escape_press_quits() {
    let mut state = ShellState::default();
    run(&mut state, press(InputKey::Esc));
    assert!(state.should_quit());
}

#[test]
fn test_escape_release_is_ignored() {
    let mut state = ShellState::default();
    run(
        &mut state,
        Message::Key {
            key: InputKey::Esc,
            pressed: false,
        },
    );
    assert!(!state.should_quit());
}

#[test]
fn test_digit_keys_switch_modes() {
    let mut state = ShellState::default();

    let actions = run(&mut state, press(InputKey::Digit(3)));
    assert_eq!(actions, vec![UpdateAction::ModeChanged { mode: Mode::Borg }]);
    assert_eq!(state.theme.color_of("primary"), "#00FF00");

    run(&mut state, press(InputKey::Digit(5)));
    assert_eq!(state.theme.mode(), Mode::Holodeck);

    run(&mut state, press(InputKey::Digit(1)));
    assert_eq!(state.theme.mode(), Mode::Starfleet);
}

#[test]
fn test_other_digits_do_nothing() {
    let mut state = ShellState::default();
    for d in [0, 6, 9] {
        assert!(run(&mut state, press(InputKey::Digit(d))).is_empty());
    }
    assert!(run(&mut state, press(InputKey::Other(30))).is_empty());
    assert_eq!(state.theme.mode(), Mode::Starfleet);
}

#[test]
fn test_switch_mode_unknown_falls_back() {
    let mut state = ShellState::default();
    run(&mut state, Message::SwitchMode("terran".into()));
    let actions = run(&mut state, Message::SwitchMode("klingon".into()));
    assert_eq!(
        actions,
        vec![UpdateAction::ModeChanged {
            mode: Mode::Starfleet
        }]
    );
    assert_eq!(state.theme.color(Slot::Primary), "#CC99CC");
}

/// Log lines emitted while `f` runs
fn captured_logs(f: impl FnOnce()) -> String {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let sink = Sink(Arc::new(Mutex::new(Vec::new())));
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = sink.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_switch_mode_logs_once() {
    let mut state = ShellState::default();
    let logs = captured_logs(|| {
        run(&mut state, Message::SwitchMode("klingon".into()));
    });
    let mode_lines: Vec<&str> = logs
        .lines()
        .filter(|l| l.to_lowercase().contains("theme mode"))
        .collect();
    assert_eq!(mode_lines.len(), 1, "{logs}");
    assert!(mode_lines[0].contains("WARN"));

    let logs = captured_logs(|| {
        run(&mut state, Message::SwitchMode("borg".into()));
    });
    assert_eq!(
        logs.lines()
            .filter(|l| l.to_lowercase().contains("theme mode"))
            .count(),
        1
    );
}

#[test]
fn test_ping_answers_with_pong() {
    let mut state = ShellState::default();
    let result = update(&mut state, Message::Ping { serial: 42 });
    assert_eq!(result.action, Some(UpdateAction::Pong { serial: 42 }));
}

#[test]
fn test_configure_resizes() {
    let mut state = ShellState::default();
    let actions = run(
        &mut state,
        Message::Configure {
            width: 1280,
            height: 720,
        },
    );
    assert_eq!(
        actions,
        vec![UpdateAction::Resize {
            width: 1280,
            height: 720
        }]
    );
    assert_eq!((state.width, state.height), (1280, 720));
    assert_eq!(state.phase, ShellPhase::Running);
}

#[test]
fn test_configure_non_positive_is_ignored() {
    let mut state = ShellState::default();
    for (width, height) in [(0, 0), (0, 720), (1280, 0), (-5, 720)] {
        assert!(run(&mut state, Message::Configure { width, height }).is_empty());
    }
    assert_eq!((state.width, state.height), (1920, 1080));
}

#[test]
fn test_configure_same_size_starts_running_without_resize() {
    let mut state = ShellState::default();
    let actions = run(
        &mut state,
        Message::Configure {
            width: 1920,
            height: 1080,
        },
    );
    assert!(actions.is_empty());
    assert_eq!(state.phase, ShellPhase::Running);
}

#[test]
fn test_output_mode_current_only() {
    let mut state = ShellState::default();

    let actions = run(
        &mut state,
        Message::OutputMode {
            width: 1024,
            height: 768,
            refresh_mhz: 75_000,
            current: false,
        },
    );
    assert!(actions.is_empty());
    assert_eq!(state.refresh_mhz, None);

    run(
        &mut state,
        Message::OutputMode {
            width: 1024,
            height: 768,
            refresh_mhz: 75_000,
            current: true,
        },
    );
    assert_eq!(state.refresh_mhz, Some(75_000));
    assert_eq!((state.width, state.height), (1024, 768));
}

#[test]
fn test_pointer_motion_hovers_button() {
    let mut state = ShellState::default();
    run(&mut state, Message::PointerMotion { x: 100.0, y: 90.0 });
    assert_eq!(state.hovered, Some(0));
    assert_eq!(
        state.interface.buttons[0].state,
        lcars_render::ButtonState::Hover
    );

    run(&mut state, Message::PointerMotion { x: 900.0, y: 90.0 });
    assert_eq!(state.hovered, None);
    assert_eq!(
        state.interface.buttons[0].state,
        lcars_render::ButtonState::Normal
    );
}

#[test]
fn test_click_activates_button() {
    let mut state = ShellState::default();
    run(&mut state, Message::PointerMotion { x: 100.0, y: 450.0 });
    run(
        &mut state,
        Message::PointerButton {
            button: BTN_LEFT,
            pressed: true,
        },
    );
    assert_eq!(state.pressed, Some(6));

    let actions = run(
        &mut state,
        Message::PointerButton {
            button: BTN_LEFT,
            pressed: false,
        },
    );
    assert_eq!(
        actions,
        vec![UpdateAction::ButtonActivated {
            label: "RED ALERT".to_string()
        }]
    );
    assert_eq!(state.pressed, None);
}

#[test]
fn test_release_elsewhere_cancels_click() {
    let mut state = ShellState::default();
    run(&mut state, Message::PointerMotion { x: 100.0, y: 90.0 });
    run(
        &mut state,
        Message::PointerButton {
            button: BTN_LEFT,
            pressed: true,
        },
    );
    run(&mut state, Message::PointerMotion { x: 100.0, y: 150.0 });
    let actions = run(
        &mut state,
        Message::PointerButton {
            button: BTN_LEFT,
            pressed: false,
        },
    );
    assert!(actions.is_empty());
}

#[test]
fn test_right_button_ignored() {
    let mut state = ShellState::default();
    run(&mut state, Message::PointerMotion { x: 100.0, y: 90.0 });
    run(
        &mut state,
        Message::PointerButton {
            button: 0x111,
            pressed: true,
        },
    );
    assert_eq!(state.pressed, None);
}
