//! Terminal output formatting
//!
//! Colored printing for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_keyboard, print_outcome, print_statistics,
};
