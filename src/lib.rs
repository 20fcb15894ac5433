//! Themed Wordle
//!
//! A five-letter word puzzle drawn from a prostate cancer awareness word list,
//! with per-word hints, a clickable on-screen keyboard, and a plain CLI mode.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_awareness::core::{Word, evaluate};
//!
//! let guess = Word::new("roomy").unwrap();
//! let secret = Word::new("tumor").unwrap();
//!
//! let feedback = evaluate(&guess, &secret);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// File logging
pub mod logging;
