//! Interactive TUI interface
//!
//! ratatui front end over [`crate::game::Game`]: the board, a clickable
//! virtual keyboard, hint panel and transient notices.

mod app;
mod event;
mod rendering;

pub use app::{App, run_tui};
pub use event::{Action, event_to_action};
pub use rendering::ui;
