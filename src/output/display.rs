//! Display functions for command results

use super::formatters::{colored_alphabet, colored_guess};
use crate::core::{Feedback, LetterState, Word};
use crate::game::{Game, GameStatus, MAX_ATTEMPTS, Statistics};
use colored::Colorize;

/// Print the feedback of a single guess against a secret
pub fn print_check_result(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_yellow().bold(),
        secret.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}  {}", colored_guess(guess, feedback), feedback.to_emoji());

    let states: Vec<&str> = feedback.states().iter().map(|s| s.label()).collect();
    println!("  {}", states.join(", ").bright_black());

    if feedback.is_perfect() {
        println!("\n  {}", "Exact match!".green().bold());
    } else {
        println!(
            "\n  {} correct, {} present",
            feedback.count(LetterState::Correct),
            feedback.count(LetterState::Present)
        );
    }
}

/// Print every finished row of a game
pub fn print_board(game: &Game) {
    for (i, row) in game.rows().iter().enumerate() {
        println!(
            "  {}. {}  {}",
            (i + 1).to_string().bright_black(),
            colored_guess(&row.guess, &row.feedback),
            row.feedback.to_emoji()
        );
    }
}

/// Print the cumulative keyboard status as a colored alphabet
pub fn print_keyboard(game: &Game) {
    println!("\n  {}", colored_alphabet(|letter| game.keyboard().get(letter)));
}

/// Print the end-of-game banner and share text
pub fn print_outcome(game: &Game) {
    println!();
    match game.status() {
        GameStatus::Playing => {
            println!(
                "{}",
                format!(
                    "Still playing after {} of {MAX_ATTEMPTS} guesses",
                    game.rows().len()
                )
                .yellow()
            );
            return;
        }
        GameStatus::Won => println!(
            "{}",
            format!("✅ Congratulations! You guessed the word {}!", game.secret())
                .green()
                .bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("❌ Game over! The word was {}.", game.secret())
                .red()
                .bold()
        ),
    }

    if let Some(share) = game.share_text() {
        println!("\n{share}");
    }
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "SESSION STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    if stats.games_won == 0 {
        return;
    }

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(1).max(1);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar_width = count * 30 / most;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(30 - bar_width).bright_black()
        );
        println!("   {}: {bar} {count}", i + 1);
    }
}
