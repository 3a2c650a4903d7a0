//! TUI application state and logic

use crate::core::{MAX_GUESSES, Word};
use crate::game::{GameConfig, KeyInput, KeyOutcome, Session, SessionStatus};
use crate::puzzle::PuzzleError;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    /// `None` when no puzzle could be loaded; input is then disabled
    pub session: Option<Session>,
    pub title: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 1..=6
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl App {
    #[must_use]
    pub fn new(puzzle: Result<Word, PuzzleError>, config: GameConfig, title: String) -> Self {
        let mut app = Self {
            session: None,
            title,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        match puzzle {
            Ok(answer) => {
                app.session = Some(Session::new(answer, config));
                app.add_message("Guess the five-letter word!", MessageStyle::Info);
            }
            Err(PuzzleError::Missing) => {
                app.add_message(&PuzzleError::Missing.to_string(), MessageStyle::Error);
            }
            Err(e) => {
                warn!("no puzzle: {e}");
                app.add_message(&PuzzleError::Missing.to_string(), MessageStyle::Error);
                app.add_message(&e.to_string(), MessageStyle::Error);
            }
        }

        app
    }

    #[must_use]
    pub fn has_puzzle(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_over)
    }

    /// Translate a terminal key press into an app action
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if !self.has_puzzle() || self.is_over() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') if self.is_over() => self.new_game(),
                _ => {}
            }
            return;
        }

        let input = match key.code {
            KeyCode::Enter => KeyInput::Enter,
            KeyCode::Backspace | KeyCode::Delete => KeyInput::Delete,
            KeyCode::Char(c) => match KeyInput::from_char(c) {
                Some(input) => input,
                None => return,
            },
            _ => return,
        };
        self.handle_input(input);
    }

    /// Feed one key into the session and react to the outcome
    pub fn handle_input(&mut self, input: KeyInput) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.handle_key(input) {
            KeyOutcome::Submitted(feedback) => {
                debug!("submitted row: {feedback}");
                let status = session.status();
                let guesses = session.history().len();
                let message = session.message().to_string();
                match status {
                    SessionStatus::Won => {
                        self.record_game(Some(guesses));
                        self.add_message(&celebration(guesses), MessageStyle::Success);
                        self.add_message("Press 'n' to replay or 'q' to quit.", MessageStyle::Info);
                    }
                    SessionStatus::Lost => {
                        self.record_game(None);
                        self.add_message(&message, MessageStyle::Error);
                        self.add_message("Press 'n' to replay or 'q' to quit.", MessageStyle::Info);
                    }
                    SessionStatus::InProgress => {}
                }
            }
            KeyOutcome::Rejected(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            KeyOutcome::Typed | KeyOutcome::Deleted | KeyOutcome::Ignored => {}
        }
    }

    fn record_game(&mut self, won_in: Option<usize>) {
        self.stats.total_games += 1;
        if let Some(guesses) = won_in {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
        }
    }

    /// Start the same puzzle over with an empty board
    pub fn new_game(&mut self) {
        if let Some(session) = &self.session {
            self.session = Some(session.restart());
            self.messages.clear();
            self.add_message("New game started!", MessageStyle::Info);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Share grid for a finished game
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.session
            .as_ref()
            .filter(|s| s.is_over())
            .map(|s| s.share_text(&self.title))
    }
}

fn celebration(guesses: usize) -> String {
    let text = match guesses {
        1 => "🎯 HOLE IN ONE! You got it!",
        2 => "🔥 MAGNIFICENT! You got it in two!",
        3 => "✨ SPLENDID! You got it in three!",
        4 => "👏 GREAT! You got it in four!",
        5 => "🎉 NICE! You got it in five!",
        _ => "😅 PHEW! You got it!",
    };
    text.to_string()
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let app = res?;
    if let Some(text) = app.share_text() {
        println!("{text}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(word: &str) -> App {
        let answer = Word::new(word).map_err(PuzzleError::from);
        App::new(answer, GameConfig::default(), "Wordle".to_string())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_guess(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn winning_updates_stats() {
        let mut app = app("crane");
        type_guess(&mut app, "slate");
        type_guess(&mut app, "crane");
        assert!(app.is_over());
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(app.share_text().unwrap().starts_with("Wordle 2/6"));
    }

    #[test]
    fn q_is_a_letter_while_playing() {
        let mut app = app("quiet");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.session.as_ref().unwrap().col(), 1);
    }

    #[test]
    fn q_quits_after_game_over() {
        let mut app = app("quiet");
        type_guess(&mut app, "quiet");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn n_replays_same_puzzle() {
        let mut app = app("crane");
        type_guess(&mut app, "crane");
        press(&mut app, KeyCode::Char('n'));
        let session = app.session.as_ref().unwrap();
        assert!(!session.is_over());
        assert_eq!(session.answer().text(), "CRANE");
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn short_guess_shows_error() {
        let mut app = app("crane");
        type_guess(&mut app, "cr");
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Not enough letters");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn backspace_deletes() {
        let mut app = app("crane");
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.as_ref().unwrap().col(), 0);
    }

    #[test]
    fn losing_records_game_without_win() {
        let mut app = app("crane");
        for word in ["slate", "audio", "house", "night", "plumb", "fizzy"] {
            type_guess(&mut app, word);
        }
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text == "Answer was CRANE"));
    }

    #[test]
    fn no_puzzle_disables_input() {
        let mut app = App::new(
            Err(PuzzleError::Missing),
            GameConfig::default(),
            "Wordle".to_string(),
        );
        assert!(!app.has_puzzle());
        assert_eq!(
            app.messages[0].text,
            "No puzzle word provided. Ask your friend for the link."
        );
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_none());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn escape_quits() {
        let mut app = app("crane");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
