//! Event handling and key mappings
//!
//! Converts crossterm events into application actions. Typing keys become a
//! [`Key`] so they share the state machine path with virtual keyboard clicks.

use crate::game::Key;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::time::Duration;

/// Poll timeout; short enough that expired notices vanish promptly
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Something the user asked the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Key(Key),
    NewGame,
    ToggleHint,
    Quit,
    /// Left click at a terminal cell, resolved against the current layout
    Click { column: u16, row: u16 },
}

/// Polls for a terminal event with the default timeout
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an action, if it maps to one
#[must_use]
pub fn event_to_action(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => key_to_action(*key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

fn key_to_action(key: KeyEvent) -> Option<Action> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('n') if ctrl => Some(Action::NewGame),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::F(2) => Some(Action::NewGame),
        KeyCode::F(1) | KeyCode::Tab | KeyCode::Char('?') => Some(Action::ToggleHint),
        KeyCode::Enter => Some(Action::Key(Key::Enter)),
        KeyCode::Backspace => Some(Action::Key(Key::Backspace)),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Action::Key(Key::Letter(c))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn typing_keys() {
        assert_eq!(
            event_to_action(&press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Action::Key(Key::Letter('a')))
        );
        assert_eq!(
            event_to_action(&press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::Key(Key::Letter('A')))
        );
        assert_eq!(
            event_to_action(&press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Key(Key::Enter))
        );
        assert_eq!(
            event_to_action(&press(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Action::Key(Key::Backspace))
        );
    }

    #[test]
    fn non_letters_still_reach_the_game() {
        // The state machine decides to ignore them
        assert_eq!(
            event_to_action(&press(KeyCode::Char('7'), KeyModifiers::NONE)),
            Some(Action::Key(Key::Letter('7')))
        );
    }

    #[test]
    fn control_keys() {
        assert_eq!(
            event_to_action(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            event_to_action(&press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            event_to_action(&press(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(Action::NewGame)
        );
        assert_eq!(
            event_to_action(&press(KeyCode::F(2), KeyModifiers::NONE)),
            Some(Action::NewGame)
        );
        assert_eq!(
            event_to_action(&press(KeyCode::F(1), KeyModifiers::NONE)),
            Some(Action::ToggleHint)
        );
        assert_eq!(
            event_to_action(&press(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(Action::ToggleHint)
        );
        assert_eq!(
            event_to_action(&press(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(event_to_action(&release), None);
    }

    #[test]
    fn left_click_maps_to_position() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 30,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            event_to_action(&click),
            Some(Action::Click { column: 12, row: 30 })
        );

        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 12,
            row: 30,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(event_to_action(&right), None);
    }
}
