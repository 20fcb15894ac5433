//! Themed Wordle - CLI
//!
//! TUI game by default, with a line-based mode and one-shot helpers for
//! checking and replaying guesses.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use wordle_awareness::{
    commands::{check_guess, replay_game, run_simple},
    game::{DEFAULT_NOTICE_DURATION, Game, GameConfig},
    logging::init_logging,
    output::{print_board, print_check_result, print_keyboard, print_outcome},
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_awareness",
    about = "Prostate cancer awareness Wordle with hints and a clickable keyboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file with 'WORD: hint' lines (default: built-in themed list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for secret selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// How long notices stay on screen, in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_NOTICE_DURATION.as_millis() as u64)]
    notice_ms: u64,

    /// Write diagnostic logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Show the feedback for one guess against a secret
    Check {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Replay a sequence of guesses against a secret from the word list
    Replay {
        /// The secret word
        secret: String,

        /// Guesses in the order they were played
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

fn load_words(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => Ok(WordList::load_from_file(path)?),
        None => Ok(WordList::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    let words = load_words(cli.words.as_deref())?;
    let config = GameConfig::default()
        .with_notice_millis(cli.notice_ms)
        .with_seed(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words, config),
        Commands::Simple => run_simple_command(words, config),
        Commands::Check { guess, secret } => run_check_command(&guess, &secret),
        Commands::Replay { secret, guesses } => {
            run_replay_command(words, config, &secret, &guesses)
        }
    }
}

fn run_play_command(words: WordList, config: GameConfig) -> Result<()> {
    use wordle_awareness::interactive::{App, run_tui};

    let app = App::new(words, config);
    run_tui(app)
}

fn run_simple_command(words: WordList, config: GameConfig) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = Game::new(words, config, &mut rng);
    run_simple(&mut game, &mut rng)?;
    Ok(())
}

fn run_check_command(guess: &str, secret: &str) -> Result<()> {
    let result = check_guess(guess, secret)?;
    print_check_result(&result.guess, &result.secret, &result.feedback);
    Ok(())
}

fn run_replay_command(
    words: WordList,
    config: GameConfig,
    secret: &str,
    guesses: &[String],
) -> Result<()> {
    let game = replay_game(words, config, secret, guesses)?;

    println!();
    print_board(&game);
    if !game.status().is_over() {
        print_keyboard(&game);
    }
    print_outcome(&game);
    Ok(())
}
