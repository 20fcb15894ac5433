//! Shared input dispatch
//!
//! Physical keys and virtual keyboard clicks are both turned into a [`Key`]
//! and handed to [`Game::press`], so the state machine has a single entry
//! point for typing.

use super::{Game, SubmitOutcome};
use std::time::Instant;

/// Layout of the on-screen keyboard, top row first
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "BACKSPACE"],
];

/// A typing action, independent of where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Map a virtual keyboard label ("A", "ENTER", "BACKSPACE") to a key
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_uppercase().as_str() {
            "ENTER" => Some(Self::Enter),
            "BACKSPACE" => Some(Self::Backspace),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_alphabetic() => Some(Self::Letter(ch)),
                    _ => None,
                }
            }
        }
    }

    /// Text shown on the virtual key
    #[must_use]
    pub fn caption(label: &str) -> &str {
        if label == "BACKSPACE" { "←" } else { label }
    }
}

impl Game {
    /// Apply one typing action
    ///
    /// Returns the submission outcome for [`Key::Enter`], `None` otherwise.
    pub fn press(&mut self, key: Key, now: Instant) -> Option<SubmitOutcome> {
        match key {
            Key::Letter(ch) => {
                self.append_letter(ch);
                None
            }
            Key::Backspace => {
                self.delete_letter();
                None
            }
            Key::Enter => Some(self.submit_guess(now)),
        }
    }
}
