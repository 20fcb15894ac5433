//! TUI rendering with ratatui
//!
//! Everything drawn here is read from [`App`]; the layout helpers are shared
//! with mouse hit-testing so clicks land on what is on screen.

use super::app::App;
use crate::core::LetterState;
use crate::game::{GameStatus, KEYBOARD_ROWS, Key, NoticeKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use std::time::Instant;

const BUTTON_WIDTH: u16 = 13;
const BUTTON_GAP: u16 = 2;
const KEY_GAP: u16 = 1;

/// Screen regions, computed the same way for drawing and for clicks
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScreenLayout {
    pub header: Rect,
    pub notice: Rect,
    pub board: Rect,
    pub new_game_button: Rect,
    pub hint_button: Rect,
    pub hint: Rect,
    pub keyboard: Rect,
    pub outcome: Rect,
    pub footer: Rect,
    pub status: Rect,
}

pub(crate) fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Length(1),  // Notice
            Constraint::Length(11), // Board
            Constraint::Length(1),  // Spacer
            Constraint::Length(1),  // Buttons
            Constraint::Length(3),  // Hint
            Constraint::Length(3),  // Keyboard
            Constraint::Length(1),  // Outcome
            Constraint::Min(0),     // Instructions / share text
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    let buttons = chunks[4];
    let total = BUTTON_WIDTH * 2 + BUTTON_GAP;
    let start = buttons.x + buttons.width.saturating_sub(total) / 2;
    let new_game_button =
        Rect::new(start, buttons.y, BUTTON_WIDTH, buttons.height).intersection(buttons);
    let hint_button = Rect::new(
        start + BUTTON_WIDTH + BUTTON_GAP,
        buttons.y,
        BUTTON_WIDTH,
        buttons.height,
    )
    .intersection(buttons);

    ScreenLayout {
        header: chunks[0],
        notice: chunks[1],
        board: chunks[2],
        new_game_button,
        hint_button,
        hint: chunks[5],
        keyboard: chunks[6],
        outcome: chunks[7],
        footer: chunks[8],
        status: chunks[9],
    }
}

/// Width of a virtual key on screen
fn key_width(label: &str) -> u16 {
    match label {
        "ENTER" => 7,
        "BACKSPACE" => 5,
        _ => 3,
    }
}

/// Placement of every virtual key inside `area`, one keyboard row per line
///
/// Keys that do not fit are left out.
pub(crate) fn keyboard_keys(area: Rect) -> Vec<(Rect, &'static str)> {
    let mut keys = Vec::new();

    for (row_index, row) in KEYBOARD_ROWS.iter().enumerate() {
        let row_index = row_index as u16;
        if row_index >= area.height {
            break;
        }

        let widths: u16 = row.iter().map(|label| key_width(label)).sum();
        let total = widths + KEY_GAP * (row.len() as u16 - 1);
        let mut x = area.x + area.width.saturating_sub(total) / 2;

        for &label in *row {
            let rect = Rect::new(x, area.y + row_index, key_width(label), 1);
            if rect.right() <= area.right() {
                keys.push((rect, label));
            }
            x += key_width(label) + KEY_GAP;
        }
    }

    keys
}

pub(crate) fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn tile_style(state: LetterState, filled: bool) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Unknown if filled => Style::default()
            .fg(Color::White)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
        LetterState::Unknown => Style::default().fg(Color::DarkGray),
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let now = Instant::now();
    let layout = screen_layout(f.area());

    render_header(f, layout.header);
    render_notice(f, app, layout.notice, now);
    render_board(f, app, layout.board);
    render_buttons(f, app, &layout);
    render_hint(f, app, layout.hint);
    render_keyboard(f, app, layout.keyboard);
    render_outcome(f, app, layout.outcome);
    render_footer(f, app, layout.footer);
    render_status(f, app, layout.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Prostate Cancer Awareness Wordle",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Guess the prostate cancer-related word in six tries"),
    ];

    let header = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_notice(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let Some(notice) = app.game.notice_at(now) else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let paragraph = Paragraph::new(notice.text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    for (i, row) in app.game.grid().iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        let mut spans = Vec::new();
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                spans.push(Span::raw(" "));
            }
            let text = match cell.letter {
                Some(letter) => format!(" {letter} "),
                None => " · ".to_string(),
            };
            spans.push(Span::styled(text, tile_style(cell.state, cell.letter.is_some())));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_buttons(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let button_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    f.render_widget(
        Paragraph::new("New Game")
            .alignment(Alignment::Center)
            .style(button_style),
        layout.new_game_button,
    );

    let (label, style) = match (app.game.hint_visible(), app.game.hint_used()) {
        (true, _) => ("Hide Hint", button_style),
        (false, true) => ("Show Hint", button_style.bg(Color::Magenta)),
        (false, false) => ("Show Hint", button_style),
    };
    f.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style),
        layout.hint_button,
    );
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    if !app.game.hint_visible() {
        return;
    }

    let text = app.game.hint().unwrap_or("No hint for this word");
    let hint = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(hint, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    for (rect, label) in keyboard_keys(area) {
        let style = match Key::from_label(label) {
            Some(Key::Letter(ch)) => match app.game.keyboard().get(ch as u8) {
                LetterState::Unknown => Style::default().fg(Color::Black).bg(Color::Gray),
                state => tile_style(state, true),
            },
            _ => Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        };

        f.render_widget(
            Paragraph::new(Key::caption(label))
                .alignment(Alignment::Center)
                .style(style),
            rect,
        );
    }
}

fn render_outcome(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.game.status() {
        GameStatus::Playing => return,
        GameStatus::Won => (
            format!("Congratulations! You guessed the word {}!", app.game.secret()),
            Color::Green,
        ),
        GameStatus::Lost => (
            format!("Game over! The word was {}.", app.game.secret()),
            Color::Red,
        ),
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    if let Some(share) = app.game.share_text() {
        let lines: Vec<Line> = share.lines().map(Line::from).collect();
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
        return;
    }

    let lines = vec![
        Line::from(vec![
            Span::styled("Green", Style::default().fg(Color::Green)),
            Span::raw(": right letter, right spot  "),
            Span::styled("Yellow", Style::default().fg(Color::Yellow)),
            Span::raw(": in the word, wrong spot  "),
            Span::styled("Gray", Style::default().fg(Color::DarkGray)),
            Span::raw(": not in the word"),
        ]),
        Line::from("Type letters or click the keys below the board. Use the hint if you need help."),
    ];
    let instructions = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" How to Play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(instructions, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    const HELP: &str = "F1: Hint | F2: New Game | Esc: Quit";

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(HELP.len() as u16 + 2)])
        .split(area);

    let mut stats_text = format!(
        " Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.games_played,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    if app.game.hint_used() {
        stats_text.push_str(" | Hint used");
    }
    f.render_widget(Paragraph::new(stats_text), chunks[0]);

    let help = Paragraph::new(HELP)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
