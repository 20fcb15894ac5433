//! Cumulative per-letter status for the on-screen keyboard

use super::{Feedback, LetterState, Word};
use rustc_hash::FxHashMap;

/// Best classification seen so far for each letter
///
/// Letters never seen read as [`LetterState::Unknown`]. Entries only ever
/// move up the `Absent < Present < Correct` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<u8, LetterState>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of `letter` (case-insensitive)
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterState {
        self.letters
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    /// Fold one evaluated guess into the map, upgrading but never downgrading
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &state) in guess.chars().iter().zip(feedback.states()) {
            let entry = self.letters.entry(letter).or_default();
            if state > *entry {
                *entry = state;
            }
        }
    }

    /// Forget every letter
    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Number of letters with a known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
