//! Game state and transitions

use super::{GameConfig, Notice, NoticeKind};
use crate::core::{Feedback, KeyboardStatus, LetterState, WORD_LENGTH, Word, evaluate};
use crate::wordlists::WordList;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info};

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

const NOT_ENOUGH_LETTERS: &str = "Not enough letters";
const WIN_TEXT: &str = "Congratulations! You won!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Errors from constructing a game with a chosen secret
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid secret: {0}")]
    InvalidSecret(#[from] crate::core::WordError),

    #[error("{0} is not in the word list")]
    UnknownSecret(String),
}

/// A finalized guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub guess: Word,
    pub feedback: Feedback,
}

/// One board cell as the presentation layer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub state: LetterState,
}

/// What a submission attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The game is already over
    Ignored,
    /// The buffer was not full; a notice was shown
    TooShort,
    /// The guess missed and another row is available
    Continue(Feedback),
    Won(Feedback),
    Lost(Feedback),
}

/// The whole state of one game
#[derive(Debug, Clone)]
pub struct Game {
    words: WordList,
    config: GameConfig,
    secret: Word,
    rows: Vec<GuessRow>,
    row: usize,
    buffer: String,
    status: GameStatus,
    keyboard: KeyboardStatus,
    notice: Option<Notice>,
    hint_visible: bool,
    hint_used: bool,
}

impl Game {
    /// Create a game with a secret drawn uniformly from `words`
    pub fn new<R: Rng>(words: WordList, config: GameConfig, rng: &mut R) -> Self {
        let secret = pick_secret(&words, rng);
        let mut game = Self::blank(words, config, secret);
        game.log_start();
        game
    }

    /// Create a game with a specific secret from `words`
    ///
    /// # Errors
    ///
    /// Returns an error if `secret` is not a valid word or is not on the list.
    pub fn with_secret(words: WordList, config: GameConfig, secret: &str) -> Result<Self, GameError> {
        let secret = Word::new(secret)?;
        if !words.contains(&secret) {
            return Err(GameError::UnknownSecret(secret.text().to_string()));
        }
        let mut game = Self::blank(words, config, secret);
        game.log_start();
        Ok(game)
    }

    fn blank(words: WordList, config: GameConfig, secret: Word) -> Self {
        Self {
            words,
            config,
            secret,
            rows: Vec::with_capacity(MAX_ATTEMPTS),
            row: 0,
            buffer: String::with_capacity(WORD_LENGTH),
            status: GameStatus::Playing,
            keyboard: KeyboardStatus::new(),
            notice: None,
            hint_visible: false,
            hint_used: false,
        }
    }

    fn log_start(&self) {
        info!(candidates = self.words.len(), "new game started");
        debug!(secret = %self.secret, "secret selected");
    }

    /// Pick a new secret and reset every piece of per-game state
    pub fn start_new_game<R: Rng>(&mut self, rng: &mut R) {
        self.secret = pick_secret(&self.words, rng);
        self.rows.clear();
        self.row = 0;
        self.buffer.clear();
        self.status = GameStatus::Playing;
        self.keyboard.clear();
        self.notice = None;
        self.hint_visible = false;
        self.hint_used = false;
        self.log_start();
    }

    /// Append a letter to the active buffer
    ///
    /// Ignored unless the game is in progress, the buffer has room, and `ch`
    /// is an ASCII letter. Returns whether the letter was taken.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.status != GameStatus::Playing
            || self.buffer.len() >= WORD_LENGTH
            || !ch.is_ascii_alphabetic()
        {
            debug!(%ch, "letter ignored");
            return false;
        }
        self.buffer.push(ch.to_ascii_uppercase());
        true
    }

    /// Remove the last buffered letter; returns whether one was removed
    pub fn delete_letter(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Submit the active buffer as a guess
    pub fn submit_guess(&mut self, now: Instant) -> SubmitOutcome {
        if self.status != GameStatus::Playing {
            debug!("submit ignored, game over");
            return SubmitOutcome::Ignored;
        }

        let Ok(guess) = Word::new(self.buffer.as_str()) else {
            debug!(len = self.buffer.len(), "submit rejected, buffer incomplete");
            self.show_notice(NOT_ENOUGH_LETTERS, NoticeKind::Error, now);
            return SubmitOutcome::TooShort;
        };

        let feedback = evaluate(&guess, &self.secret);
        self.keyboard.record(&guess, &feedback);
        self.rows.push(GuessRow {
            guess: guess.clone(),
            feedback,
        });
        info!(row = self.row, guess = %guess, feedback = %feedback.to_emoji(), "guess submitted");

        // Win check precedes the loss check so a correct sixth guess wins
        if guess == self.secret {
            self.status = GameStatus::Won;
            self.show_notice(WIN_TEXT, NoticeKind::Success, now);
            info!(attempts = self.rows.len(), "game won");
            SubmitOutcome::Won(feedback)
        } else if self.row == MAX_ATTEMPTS - 1 {
            self.status = GameStatus::Lost;
            let text = format!("Game over! The word was {}", self.secret);
            self.show_notice(text, NoticeKind::Error, now);
            info!("game lost");
            SubmitOutcome::Lost(feedback)
        } else {
            self.row += 1;
            self.buffer.clear();
            SubmitOutcome::Continue(feedback)
        }
    }

    /// Flip hint visibility; the hint counts as used from the first reveal
    pub fn toggle_hint(&mut self) {
        self.hint_used = true;
        self.hint_visible = !self.hint_visible;
        debug!(visible = self.hint_visible, "hint toggled");
    }

    fn show_notice(&mut self, text: impl Into<String>, kind: NoticeKind, now: Instant) {
        self.notice = Some(Notice::new(text, kind, now, self.config.notice_duration));
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Index of the row being (or last) played, 0-based
    #[must_use]
    pub fn row_index(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Finalized guesses, oldest first
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    /// The notice, if one is still visible at `now`
    #[must_use]
    pub fn notice_at(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible(now))
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    #[must_use]
    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Hint text for the current secret
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.words.hint(&self.secret)
    }

    /// The full board: finalized rows, the in-progress row, then empty rows
    #[must_use]
    pub fn grid(&self) -> [[Cell; WORD_LENGTH]; MAX_ATTEMPTS] {
        let mut grid = [[Cell::default(); WORD_LENGTH]; MAX_ATTEMPTS];

        for (cells, row) in grid.iter_mut().zip(&self.rows) {
            for (i, cell) in cells.iter_mut().enumerate() {
                *cell = Cell {
                    letter: Some(char::from(row.guess.char_at(i))),
                    state: row.feedback.states()[i],
                };
            }
        }

        if self.status == GameStatus::Playing {
            for (cell, ch) in grid[self.row].iter_mut().zip(self.buffer.chars()) {
                cell.letter = Some(ch);
            }
        }

        grid
    }

    /// Emoji summary of a finished game, e.g. "Wordle 3/6" followed by rows
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        let score = match self.status {
            GameStatus::Playing => return None,
            GameStatus::Won => self.rows.len().to_string(),
            GameStatus::Lost => "X".to_string(),
        };
        let hint_mark = if self.hint_used { "*" } else { "" };

        let mut text = format!("Wordle {score}/{MAX_ATTEMPTS}{hint_mark}");
        for row in &self.rows {
            text.push('\n');
            text.push_str(&row.feedback.to_emoji());
        }
        Some(text)
    }
}

fn pick_secret<R: Rng>(words: &WordList, rng: &mut R) -> Word {
    let index = rng.random_range(0..words.len());
    words.words()[index].clone()
}
