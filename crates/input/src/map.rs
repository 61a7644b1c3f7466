//! Key mapping from terminal events to logical input events.

use crate::types::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a logical event.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(InputEvent::FlapPressed),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::RestartPressed),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Map a raw terminal event. Only key presses count; auto-repeat and release
/// events are dropped so holding a key does not flap every frame.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key_event(*key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    #[test]
    fn test_flap_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputEvent::FlapPressed)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Some(InputEvent::FlapPressed)
        );
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(InputEvent::RestartPressed)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(InputEvent::RestartPressed)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('c'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_repeat_and_release_are_ignored() {
        let repeat = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..repeat
        };
        assert_eq!(map_event(&Event::Key(repeat)), None);
        assert_eq!(map_event(&Event::Key(release)), None);
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::Char(' ')))),
            Some(InputEvent::FlapPressed)
        );
    }

    #[test]
    fn test_non_key_events_ignored() {
        assert_eq!(map_event(&Event::Resize(80, 24)), None);
        assert_eq!(map_event(&Event::FocusLost), None);
    }
}
