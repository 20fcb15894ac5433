//! TUI application state and logic

use super::event::{Action, event_to_action, poll_event};
use super::rendering::{contains, keyboard_keys, screen_layout, ui};
use crate::game::{Game, GameConfig, Key, Statistics, SubmitOutcome};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Instant;
use tracing::{debug, info};

/// Application state
pub struct App {
    pub game: Game,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
    /// Area of the last drawn frame, used to resolve mouse clicks
    screen: Rect,
}

impl App {
    /// Start a session with a fresh game
    ///
    /// A configured seed makes the sequence of secrets reproducible.
    #[must_use]
    pub fn new(words: WordList, config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let game = Game::new(words, config, &mut rng);

        Self {
            game,
            stats: Statistics::default(),
            should_quit: false,
            rng,
            screen: Rect::default(),
        }
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Key(key) => {
                if let Some(outcome) = self.game.press(key, now) {
                    self.on_submit(outcome);
                }
            }
            Action::NewGame => self.new_game(),
            Action::ToggleHint => self.game.toggle_hint(),
            Action::Quit => self.should_quit = true,
            Action::Click { column, row } => {
                if let Some(target) = self.click_target(column, row) {
                    self.handle_action(target, now);
                }
            }
        }
    }

    fn on_submit(&mut self, outcome: SubmitOutcome) {
        if matches!(outcome, SubmitOutcome::Won(_) | SubmitOutcome::Lost(_)) {
            self.stats.record(&self.game);
            info!(
                played = self.stats.games_played,
                won = self.stats.games_won,
                streak = self.stats.current_streak,
                "session statistics updated"
            );
        }
    }

    pub fn new_game(&mut self) {
        self.game.start_new_game(&mut self.rng);
    }

    /// What a click at (`column`, `row`) on the last frame refers to
    fn click_target(&self, column: u16, row: u16) -> Option<Action> {
        let layout = screen_layout(self.screen);

        if contains(layout.new_game_button, column, row) {
            return Some(Action::NewGame);
        }
        if contains(layout.hint_button, column, row) {
            return Some(Action::ToggleHint);
        }

        let target = keyboard_keys(layout.keyboard)
            .into_iter()
            .find(|(rect, _)| contains(*rect, column, row))
            .and_then(|(_, label)| Key::from_label(label))
            .map(Action::Key);
        if target.is_none() {
            debug!(column, row, "click outside any control");
        }
        target
    }
}

/// Restore the terminal before the default panic output
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup or teardown fails.
pub fn run_tui(app: App) -> Result<()> {
    install_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            app.screen = f.area();
            ui(f, &app);
        })?;

        // Redraw on timeout so expired notices disappear
        if let Some(event) = poll_event()?
            && let Some(action) = event_to_action(&event)
        {
            app.handle_action(action, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, KEYBOARD_ROWS};

    fn app(secret: &str) -> App {
        let mut app = App::new(WordList::embedded(), GameConfig::default().with_seed(Some(7)));
        app.game = Game::with_secret(WordList::embedded(), GameConfig::default(), secret).unwrap();
        app.screen = Rect::new(0, 0, 90, 40);
        app
    }

    fn type_and_submit(app: &mut App, word: &str) {
        let now = Instant::now();
        for ch in word.chars() {
            app.handle_action(Action::Key(Key::Letter(ch)), now);
        }
        app.handle_action(Action::Key(Key::Enter), now);
    }

    fn click_label(app: &mut App, label: &str) {
        let layout = screen_layout(app.screen);
        let (rect, _) = keyboard_keys(layout.keyboard)
            .into_iter()
            .find(|(_, l)| *l == label)
            .unwrap();
        app.handle_action(
            Action::Click {
                column: rect.x + 1,
                row: rect.y,
            },
            Instant::now(),
        );
    }

    #[test]
    fn seeded_sessions_pick_the_same_secret() {
        let config = GameConfig::default().with_seed(Some(11));
        let a = App::new(WordList::embedded(), config.clone());
        let b = App::new(WordList::embedded(), config);
        assert_eq!(a.game.secret(), b.game.secret());
    }

    #[test]
    fn typing_and_winning_records_stats() {
        let mut app = app("TRIAL");
        type_and_submit(&mut app, "trial");

        assert_eq!(app.game.status(), GameStatus::Won);
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[0], 1);
    }

    #[test]
    fn keys_after_game_over_do_not_double_count() {
        let mut app = app("TRIAL");
        type_and_submit(&mut app, "TRIAL");
        type_and_submit(&mut app, "TRIAL");
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn miss_does_not_touch_stats() {
        let mut app = app("TRIAL");
        type_and_submit(&mut app, "STOCK");
        assert_eq!(app.stats.games_played, 0);
        assert_eq!(app.game.rows().len(), 1);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app("TRIAL");
        app.handle_action(Action::Quit, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn new_game_resets_board() {
        let mut app = app("TRIAL");
        type_and_submit(&mut app, "STOCK");
        app.handle_action(Action::ToggleHint, Instant::now());

        app.handle_action(Action::NewGame, Instant::now());
        assert!(app.game.rows().is_empty());
        assert!(!app.game.hint_used());
        assert_eq!(app.game.status(), GameStatus::Playing);
    }

    #[test]
    fn clicking_virtual_keys_types() {
        let mut app = app("COLOR");
        for label in ["C", "O", "L", "X", "BACKSPACE", "O", "R"] {
            click_label(&mut app, label);
        }
        assert_eq!(app.game.buffer(), "COLOR");

        click_label(&mut app, "ENTER");
        assert_eq!(app.game.status(), GameStatus::Won);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn every_virtual_key_is_clickable() {
        for label in KEYBOARD_ROWS.iter().flat_map(|row| row.iter()) {
            let mut app = app("COLOR");
            click_label(&mut app, label);
            match Key::from_label(label) {
                Some(Key::Letter(ch)) => assert_eq!(app.game.buffer(), ch.to_string()),
                _ => assert!(app.game.buffer().is_empty()),
            }
        }
    }

    #[test]
    fn clicking_buttons() {
        let mut app = app("COLOR");
        let layout = screen_layout(app.screen);

        let hint = layout.hint_button;
        app.handle_action(
            Action::Click {
                column: hint.x,
                row: hint.y,
            },
            Instant::now(),
        );
        assert!(app.game.hint_visible());

        type_and_submit(&mut app, "STOCK");
        let new_game = layout.new_game_button;
        app.handle_action(
            Action::Click {
                column: new_game.x + new_game.width - 1,
                row: new_game.y,
            },
            Instant::now(),
        );
        assert!(app.game.rows().is_empty());
        assert!(!app.game.hint_visible());
    }

    #[test]
    fn click_outside_controls_is_ignored() {
        let mut app = app("COLOR");
        app.handle_action(Action::Click { column: 0, row: 0 }, Instant::now());
        assert!(app.game.buffer().is_empty());
        assert!(!app.game.hint_used());
    }

    #[test]
    fn clicks_before_first_draw_hit_nothing() {
        let mut app = app("COLOR");
        app.screen = Rect::default();
        app.handle_action(Action::Click { column: 0, row: 0 }, Instant::now());
        assert!(app.game.buffer().is_empty());
    }
}
