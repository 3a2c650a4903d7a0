//! Formatting utilities for terminal output

use crate::core::{Feedback, KEYBOARD_ROWS, KeyState, Keyboard, LetterResult, Word};
use crate::game::Session;
use colored::{ColoredString, Colorize};

/// Format a guess as five coloured tiles, e.g. ` C  R  A  N  E `
#[must_use]
pub fn colored_row(guess: &Word, feedback: Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.results())
        .map(|(&letter, &result)| tile(char::from(letter), result).to_string())
        .collect()
}

fn tile(letter: char, result: LetterResult) -> ColoredString {
    let text = format!(" {letter} ");
    match result {
        LetterResult::Correct => text.black().on_green().bold(),
        LetterResult::Present => text.black().on_yellow().bold(),
        LetterResult::Absent => text.white().on_bright_black(),
    }
}

/// Keyboard rows with each key coloured by its state
#[must_use]
pub fn keyboard_lines(keyboard: &Keyboard) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|letter| key(char::from(letter), keyboard.state(letter)).to_string())
                .collect();
            format!("{}{}", " ".repeat(i), keys.join(" "))
        })
        .collect()
}

fn key(letter: char, state: Option<KeyState>) -> ColoredString {
    let text = letter.to_string();
    match state {
        Some(KeyState::Correct) => text.black().on_green(),
        Some(KeyState::Present) => text.black().on_yellow(),
        Some(KeyState::Absent) => text.bright_black(),
        None => text.normal(),
    }
}

/// Committed rows, then one placeholder line per unused row
#[must_use]
pub fn board_lines(session: &Session) -> Vec<String> {
    let mut lines: Vec<String> = session
        .history()
        .iter()
        .map(|(guess, feedback)| colored_row(guess, *feedback))
        .collect();
    let unused = session.max_guesses().saturating_sub(lines.len());
    lines.extend((0..unused).map(|_| " _ ".repeat(5).bright_black().to_string()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, KeyInput};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn row_shows_letters() {
        plain();
        let guess = Word::new("crane").unwrap();
        let row = colored_row(&guess, Feedback::WIN);
        assert_eq!(row, " C  R  A  N  E ");
    }

    #[test]
    fn keyboard_has_three_staggered_rows() {
        plain();
        let lines = keyboard_lines(&Keyboard::new());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Q W E R T Y U I O P");
        assert_eq!(lines[1], " A S D F G H J K L");
        assert_eq!(lines[2], "  Z X C V B N M");
    }

    #[test]
    fn board_pads_unused_rows() {
        plain();
        let mut session = Session::new(Word::new("crane").unwrap(), GameConfig::default());
        for c in "slate".chars() {
            session.handle_key(KeyInput::Letter(c));
        }
        session.handle_key(KeyInput::Enter);

        let lines = board_lines(&session);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], " S  L  A  T  E ");
        assert_eq!(lines[5], " _  _  _  _  _ ");
    }
}
