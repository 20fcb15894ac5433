//! In-memory statistics for the current session

use super::{Game, GameStatus, MAX_ATTEMPTS};

/// Results of the games finished in this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of guesses; index 0 is a first-guess win
    pub guess_distribution: [usize; MAX_ATTEMPTS],
}

impl Statistics {
    /// Count a finished game; games still in progress are ignored
    pub fn record(&mut self, game: &Game) {
        match game.status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = game.rows().len().checked_sub(1) {
                    self.guess_distribution[slot] += 1;
                }
            }
            GameStatus::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::WordList;
    use std::time::Instant;

    fn finished(secret: &str, guesses: &[&str]) -> Game {
        let now = Instant::now();
        let mut game = Game::with_secret(WordList::embedded(), GameConfig::default(), secret).unwrap();
        for guess in guesses {
            for ch in guess.chars() {
                game.append_letter(ch);
            }
            game.submit_guess(now);
        }
        game
    }

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert_eq!(stats.games_played, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn in_progress_game_not_counted() {
        let mut stats = Statistics::default();
        stats.record(&finished("QUANT", &["STOCK"]));
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn wins_losses_and_streaks() {
        let mut stats = Statistics::default();
        stats.record(&finished("QUANT", &["QUANT"]));
        stats.record(&finished("TUMOR", &["ROOMY", "TUMOR"]));
        stats.record(&finished(
            "STOCK",
            &["BRAND", "BAYER", "QUANT", "CHEMO", "TUMOR", "PRINT"],
        ));
        stats.record(&finished("COLOR", &["COLOR"]));

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, [2, 1, 0, 0, 0, 0]);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }
}
