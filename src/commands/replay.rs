//! Replay command
//!
//! Plays a fixed list of guesses against a chosen secret, non-interactively.

use crate::core::{WORD_LENGTH, Word, WordError};
use crate::game::{Game, GameConfig, GameError, Key};
use crate::wordlists::WordList;
use std::time::Instant;

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("guess {index} ({guess}): {source}")]
    InvalidGuess {
        index: usize,
        guess: String,
        #[source]
        source: WordError,
    },

    #[error("guess {index} ({guess}) comes after the game ended")]
    AfterGameOver { index: usize, guess: String },
}

/// Play `guesses` in order against `secret` and return the resulting game
///
/// # Errors
///
/// Returns an error if the secret is not on the list, a guess is not a
/// 5-letter word, or guesses remain after the game is decided.
pub fn replay_game(
    words: WordList,
    config: GameConfig,
    secret: &str,
    guesses: &[String],
) -> Result<Game, ReplayError> {
    let mut game = Game::with_secret(words, config, secret)?;
    let now = Instant::now();

    for (i, guess) in guesses.iter().enumerate() {
        let index = i + 1;
        Word::new(guess.as_str()).map_err(|source| ReplayError::InvalidGuess {
            index,
            guess: guess.clone(),
            source,
        })?;

        if game.status().is_over() {
            return Err(ReplayError::AfterGameOver {
                index,
                guess: guess.clone(),
            });
        }

        for ch in guess.chars().take(WORD_LENGTH) {
            game.press(Key::Letter(ch), now);
        }
        game.press(Key::Enter, now);
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn guesses(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn replay_to_win() {
        let game = replay_game(
            WordList::embedded(),
            GameConfig::default(),
            "tumor",
            &guesses(&["roomy", "TUMOR"]),
        )
        .unwrap();
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.rows().len(), 2);
    }

    #[test]
    fn replay_partial_game_still_playing() {
        let game = replay_game(
            WordList::embedded(),
            GameConfig::default(),
            "STOCK",
            &guesses(&["QUANT"]),
        )
        .unwrap();
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.row_index(), 1);
    }

    #[test]
    fn replay_to_loss() {
        let game = replay_game(
            WordList::embedded(),
            GameConfig::default(),
            "STOCK",
            &guesses(&["BRAND", "BAYER", "QUANT", "CHEMO", "TUMOR", "PRINT"]),
        )
        .unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn replay_rejects_bad_guess() {
        let err = replay_game(
            WordList::embedded(),
            GameConfig::default(),
            "STOCK",
            &guesses(&["QUANT", "NOPE"]),
        )
        .unwrap_err();
        assert!(matches!(err, ReplayError::InvalidGuess { index: 2, .. }));
    }

    #[test]
    fn replay_rejects_guess_after_win() {
        let err = replay_game(
            WordList::embedded(),
            GameConfig::default(),
            "STOCK",
            &guesses(&["STOCK", "QUANT"]),
        )
        .unwrap_err();
        assert!(matches!(err, ReplayError::AfterGameOver { index: 2, .. }));
    }

    #[test]
    fn replay_rejects_unlisted_secret() {
        let err = replay_game(WordList::embedded(), GameConfig::default(), "ZEBRA", &[]).unwrap_err();
        assert!(matches!(err, ReplayError::Game(GameError::UnknownSecret(_))));
    }
}
