//! Themed word lists
//!
//! The default list is compiled into the binary; a custom list with the same
//! `WORD: hint` format can be loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{THEMED, THEMED_COUNT};
pub use loader::{WordList, WordListError};
