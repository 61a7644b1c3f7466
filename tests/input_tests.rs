//! Key mapping and per-frame input buffering.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use tui_flappy::input::{map_event, FrameInput, MAX_EVENTS_PER_FRAME};
use tui_flappy::types::InputEvent;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn with_kind(code: KeyCode, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    })
}

#[test]
fn test_bindings() {
    assert_eq!(map_event(&press(KeyCode::Char(' '))), Some(InputEvent::FlapPressed));
    assert_eq!(map_event(&press(KeyCode::Up)), Some(InputEvent::FlapPressed));
    assert_eq!(map_event(&press(KeyCode::Char('r'))), Some(InputEvent::RestartPressed));
    assert_eq!(map_event(&press(KeyCode::Char('R'))), Some(InputEvent::RestartPressed));
    assert_eq!(map_event(&press(KeyCode::Char('q'))), Some(InputEvent::Quit));
    assert_eq!(map_event(&press(KeyCode::Esc)), Some(InputEvent::Quit));
    assert_eq!(map_event(&press(KeyCode::Char('x'))), None);
}

#[test]
fn test_ctrl_c_quits() {
    let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(map_event(&ev), Some(InputEvent::Quit));
}

#[test]
fn test_repeat_and_release_are_ignored() {
    assert_eq!(map_event(&with_kind(KeyCode::Char(' '), KeyEventKind::Repeat)), None);
    assert_eq!(map_event(&with_kind(KeyCode::Char(' '), KeyEventKind::Release)), None);
}

#[test]
fn test_frame_input_preserves_arrival_order() {
    let mut frame = FrameInput::default();
    for code in [KeyCode::Char('r'), KeyCode::Char(' '), KeyCode::Char('z'), KeyCode::Char('q')] {
        frame.push_raw(&press(code));
    }
    assert_eq!(
        frame.events.as_slice(),
        &[InputEvent::RestartPressed, InputEvent::FlapPressed, InputEvent::Quit]
    );
}

#[test]
fn test_frame_input_is_bounded() {
    let mut frame = FrameInput::default();
    for _ in 0..MAX_EVENTS_PER_FRAME * 2 {
        frame.push_raw(&press(KeyCode::Up));
    }
    assert_eq!(frame.events.len(), MAX_EVENTS_PER_FRAME);
}
