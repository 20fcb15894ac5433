//! Command implementations

pub mod check;
pub mod replay;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use replay::{ReplayError, replay_game};
pub use simple::run_simple;
