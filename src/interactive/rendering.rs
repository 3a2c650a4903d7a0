//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and message panel for the game.

use super::app::{App, MessageStyle};
use crate::core::{KEYBOARD_ROWS, KeyState, LetterResult, WORD_LENGTH};
use crate::game::Session;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Messages / share
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🟩 {} 🟨", app.title.to_uppercase()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn result_style(result: LetterResult) -> Style {
    let bg = match result {
        LetterResult::Correct => Color::Green,
        LetterResult::Present => Color::Yellow,
        LetterResult::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn board_row(session: &Session, row: usize) -> Line<'static> {
    let feedback = session.row_feedback(row);
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for col in 0..WORD_LENGTH {
        let letter = session.tile(row, col);
        let text = format!(" {} ", letter.unwrap_or('·'));
        let style = match (feedback, letter) {
            (Some(feedback), _) => result_style(feedback.at(col)),
            (None, Some(_)) => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            (None, None) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(session) = &app.session else {
        let paragraph = Paragraph::new("No puzzle to play")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = Vec::with_capacity(session.max_guesses() * 2);
    for row in 0..session.max_guesses() {
        lines.push(board_row(session, row));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Share grid
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_share(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let content = app
        .share_text()
        .unwrap_or_else(|| "Finish the puzzle to get a share grid".to_string());

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn key_style(state: Option<KeyState>) -> Style {
    match state {
        Some(KeyState::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(KeyState::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(KeyState::Absent) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.as_ref().map(Session::keyboard);
    let last = KEYBOARD_ROWS.len() - 1;

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::new();
            if i == last {
                spans.push(Span::styled("ENTER ", Style::default().fg(Color::Cyan)));
            }
            for letter in row.bytes() {
                let state = keyboard.and_then(|k| k.state(letter));
                spans.push(Span::styled(
                    format!(" {} ", char::from(letter)),
                    key_style(state),
                ));
            }
            if i == last {
                spans.push(Span::styled(" DEL", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let guess_text = app.session.as_ref().map_or_else(
        || "Guess: -".to_string(),
        |s| format!("Guess: {}/{}", s.history().len(), s.max_guesses()),
    );
    f.render_widget(
        Paragraph::new(guess_text).alignment(Alignment::Center),
        chunks[0],
    );

    #[allow(clippy::cast_precision_loss)]
    let win_rate = if app.stats.total_games > 0 {
        app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
    } else {
        0.0
    };
    let stats_text = format!(
        "Games: {} | Win Rate: {win_rate:.0}%",
        app.stats.total_games
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if !app.has_puzzle() {
        "q/Esc: Quit"
    } else if app.is_over() {
        "q: Quit | n: Play Again"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
