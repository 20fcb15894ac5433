//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState, Word};
use colored::{ColoredString, Colorize};

/// Color one letter the way its tile is shown
#[must_use]
pub fn colored_letter(letter: char, state: LetterState) -> ColoredString {
    let tile = format!(" {letter} ");
    match state {
        LetterState::Correct => tile.black().on_green().bold(),
        LetterState::Present => tile.black().on_yellow().bold(),
        LetterState::Absent => tile.white().on_bright_black(),
        LetterState::Unknown => tile.normal(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.states())
        .map(|(&letter, &state)| colored_letter(char::from(letter), state).to_string())
        .collect()
}

/// Render the alphabet with each letter colored by its keyboard status
#[must_use]
pub fn colored_alphabet(status: impl Fn(u8) -> LetterState) -> String {
    (b'A'..=b'Z')
        .map(|letter| {
            let text = char::from(letter).to_string();
            let colored = match status(letter) {
                LetterState::Correct => text.green().bold(),
                LetterState::Present => text.yellow().bold(),
                LetterState::Absent => text.bright_black().strikethrough(),
                LetterState::Unknown => text.normal(),
            };
            colored.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
