//! Feedback check command
//!
//! Evaluates one guess against one secret without playing a game.

use crate::core::{Feedback, Word, WordError, evaluate};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `secret`
///
/// Neither word has to be on the themed list.
///
/// # Errors
///
/// Returns an error if either input is not a 5-letter word.
pub fn check_guess(guess: &str, secret: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    let feedback = evaluate(&guess, &secret);

    Ok(CheckResult {
        guess,
        secret,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Absent, Correct, Present};

    #[test]
    fn check_mixed_feedback() {
        let result = check_guess("roomy", "tumor").unwrap();
        assert_eq!(result.guess.text(), "ROOMY");
        assert_eq!(result.secret.text(), "TUMOR");
        assert_eq!(
            result.feedback.states(),
            &[Present, Present, Absent, Present, Absent]
        );
    }

    #[test]
    fn check_perfect() {
        let result = check_guess("QUANT", "quant").unwrap();
        assert!(result.feedback.is_perfect());
        assert_eq!(result.feedback.count(Correct), 5);
    }

    #[test]
    fn check_invalid_words() {
        assert_eq!(
            check_guess("abc", "QUANT").err(),
            Some(WordError::InvalidLength(3))
        );
        assert!(check_guess("QUANT", "QU4NT").is_err());
    }
}
