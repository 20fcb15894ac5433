//! Per-letter feedback for a submitted guess
//!
//! Each position of a guess is classified as:
//! - Correct (right letter, right position)
//! - Present (letter is in the secret, wrong position)
//! - Absent (letter is not in the secret, or every occurrence is used up)
//!
//! `Unknown` is the unset state used by the keyboard and empty cells.

use super::{WORD_LENGTH, Word};

/// Classification of a single letter
///
/// Variants are ordered by strength: `Unknown < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterState {
    #[default]
    Unknown,
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Lowercase name, as announced for each cell
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        }
    }

    /// Square emoji used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unknown => '⬜',
        }
    }
}

/// Feedback for one guess: one classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is submitted against `secret`
    ///
    /// Duplicate letters are credited at most as many times as they occur
    /// in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and consume those secret letters
    /// 2. Second pass, left to right: mark Present while an unconsumed copy of
    ///    the letter remains, consuming it; otherwise Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_awareness::core::{Feedback, LetterState::*, Word};
    ///
    /// let guess = Word::new("ROOMY").unwrap();
    /// let secret = Word::new("TUMOR").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.states(), &[Present, Present, Absent, Present, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterState::Absent; WORD_LENGTH];
        let mut secret_available = secret.char_counts();

        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                result[i] = LetterState::Correct;

                if let Some(count) = secret_available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The classification of every position
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given classification
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Render as a row of square emoji, e.g. "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

/// Evaluate `guess` against `secret`
///
/// Shorthand for [`Feedback::calculate`].
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word) -> Feedback {
    Feedback::calculate(guess, secret)
}

#[cfg(test)]
mod tests {
    use super::LetterState::{Absent, Correct, Present};
    use super::*;

    fn feedback(guess: &str, secret: &str) -> Feedback {
        evaluate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn state_ordering() {
        assert!(LetterState::Unknown < Absent);
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(LetterState::default(), LetterState::Unknown);
    }

    #[test]
    fn all_correct() {
        let fb = feedback("QUANT", "QUANT");
        assert_eq!(fb, Feedback::PERFECT);
        assert!(fb.is_perfect());
        assert_eq!(fb.count(Correct), 5);
    }

    #[test]
    fn all_absent() {
        let fb = feedback("BRAND", "MHSPC");
        assert_eq!(fb.states(), &[Absent; 5]);
        assert!(!fb.is_perfect());
    }

    #[test]
    fn repeated_guess_letter_credited_once_per_secret_copy() {
        // TUMOR has one O: only the first O in ROOMY earns credit
        let fb = feedback("ROOMY", "TUMOR");
        assert_eq!(fb.states(), &[Present, Present, Absent, Present, Absent]);
    }

    #[test]
    fn correct_pass_runs_before_present_pass() {
        // Both O's of ROBOT line up with COLOR, leaving nothing for a Present
        let fb = feedback("ROBOT", "COLOR");
        assert_eq!(fb.states(), &[Present, Correct, Absent, Correct, Absent]);

        // Exact match later in the guess consumes the only copy first
        let fb = feedback("TTAAA", "STOCK");
        assert_eq!(fb.states(), &[Absent, Correct, Absent, Absent, Absent]);
        let fb = feedback("OTTER", "STOCK");
        assert_eq!(fb.states(), &[Present, Correct, Absent, Absent, Absent]);
    }

    #[test]
    fn duplicate_secret_letters_both_creditable() {
        let fb = feedback("OOZZZ", "COLOR");
        assert_eq!(fb.states(), &[Present, Correct, Absent, Absent, Absent]);
    }

    #[test]
    fn emoji_row() {
        assert_eq!(feedback("ROOMY", "TUMOR").to_emoji(), "🟨🟨⬛🟨⬛");
        assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn labels() {
        assert_eq!(Correct.label(), "correct");
        assert_eq!(LetterState::Unknown.label(), "unknown");
    }
}
