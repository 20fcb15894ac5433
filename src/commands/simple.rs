//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is either a command or a guess.

use crate::game::{Game, Key, Statistics, SubmitOutcome};
use crate::output::{print_board, print_keyboard, print_outcome, print_statistics};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::time::Instant;

/// What a line of input asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Quit,
    NewGame,
    ToggleHint,
    ShowStats,
    Submitted(SubmitOutcome),
}

/// Apply one line of input to the game
///
/// Commands are matched case-insensitively; anything else is typed into the
/// active row from scratch and submitted.
pub fn handle_line(game: &mut Game, line: &str, now: Instant) -> LineAction {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => LineAction::Quit,
        "new" | "n" => LineAction::NewGame,
        "hint" | "h" | "?" => LineAction::ToggleHint,
        "stats" => LineAction::ShowStats,
        guess => {
            // Each line is a whole guess, so drop anything left from before
            while game.delete_letter() {}
            for ch in guess.chars() {
                game.press(Key::Letter(ch), now);
            }
            let outcome = game
                .press(Key::Enter, now)
                .unwrap_or(SubmitOutcome::Ignored);
            LineAction::Submitted(outcome)
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(game: &mut Game, rng: &mut R) -> io::Result<Statistics> {
    let mut stats = Statistics::default();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Themed Wordle - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the themed 5-letter word in six tries.");
    println!("  - {} letter is in the right spot", "Green".green().bold());
    println!("  - {} letter is in the word elsewhere", "Yellow".yellow().bold());
    println!("  - {} letter is not in the word", "Gray".bright_black().bold());
    println!("\nCommands: 'hint', 'new', 'stats', 'quit'\n");

    loop {
        let prompt = format!("Guess {}/6", game.row_index() + 1);
        let Some(line) = get_user_input(&prompt)? else {
            break;
        };

        match handle_line(game, &line, Instant::now()) {
            LineAction::Quit => break,
            LineAction::NewGame => {
                game.start_new_game(rng);
                println!("\n🔄 New game started!\n");
            }
            LineAction::ToggleHint => {
                game.toggle_hint();
                if game.hint_visible() {
                    println!("💡 Hint: {}\n", game.hint().unwrap_or("no hint available"));
                } else {
                    println!("Hint hidden.\n");
                }
            }
            LineAction::ShowStats => print_statistics(&stats),
            LineAction::Submitted(SubmitOutcome::Ignored) => {
                println!("This game is over. Type 'new' to play again.\n");
            }
            LineAction::Submitted(SubmitOutcome::TooShort) => {
                println!("{}\n", "Not enough letters".red());
            }
            LineAction::Submitted(SubmitOutcome::Continue(_)) => {
                println!();
                print_board(game);
                print_keyboard(game);
                println!();
            }
            LineAction::Submitted(SubmitOutcome::Won(_) | SubmitOutcome::Lost(_)) => {
                println!();
                print_board(game);
                print_outcome(game);
                stats.record(game);
                println!("\nType 'new' to play again or 'quit' to exit.\n");
            }
        }
    }

    println!("\n👋 Thanks for playing!");
    print_statistics(&stats);
    Ok(stats)
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
