//! Game configuration

use std::time::Duration;

/// Default time a notice stays visible
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);

/// Tunables for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// How long a notice stays visible after it is shown
    pub notice_duration: Duration,
    /// Seed for secret selection; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            notice_duration: DEFAULT_NOTICE_DURATION,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_notice_millis(mut self, millis: u64) -> Self {
        self.notice_duration = Duration::from_millis(millis);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
