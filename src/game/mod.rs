//! Game state machine
//!
//! One explicit [`Game`] value owns everything about the round in progress.
//! Input adapters (terminal keys, virtual keyboard clicks, stdin lines) all
//! funnel into [`Game::press`].

mod config;
mod input;
mod notice;
mod state;
mod stats;

pub use config::{DEFAULT_NOTICE_DURATION, GameConfig};
pub use input::{KEYBOARD_ROWS, Key};
pub use notice::{Notice, NoticeKind};
pub use state::{Cell, Game, GameError, GameStatus, GuessRow, MAX_ATTEMPTS, SubmitOutcome};
pub use stats::Statistics;
