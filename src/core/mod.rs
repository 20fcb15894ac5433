//! Core domain types for the puzzle
//!
//! Pure types with no terminal or I/O dependencies: words, per-letter
//! feedback, and the cumulative keyboard status.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterState, evaluate};
pub use keyboard::KeyboardStatus;
pub use word::{WORD_LENGTH, Word, WordError};
