//! A single game against one answer

use super::{GameConfig, KeyInput, KeyOutcome};
use crate::core::{Feedback, Keyboard, WORD_LENGTH, Word};
use log::{debug, info};
use std::fmt::Write as _;
use thiserror::Error;

/// Reasons a submitted row is refused; the session is left untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not enough letters")]
    NotEnoughLetters,
    #[error("Not in word list")]
    NotInWordList(String),
    #[error("The game is over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Game session state
#[derive(Debug, Clone)]
pub struct Session {
    answer: Word,
    config: GameConfig,
    board: Vec<[Option<u8>; WORD_LENGTH]>,
    history: Vec<(Word, Feedback)>,
    keyboard: Keyboard,
    row: usize,
    col: usize,
    status: SessionStatus,
    message: String,
}

impl Session {
    #[must_use]
    pub fn new(answer: Word, config: GameConfig) -> Self {
        let board = vec![[None; WORD_LENGTH]; config.max_guesses];
        Self {
            answer,
            config,
            board,
            history: Vec::new(),
            keyboard: Keyboard::new(),
            row: 0,
            col: 0,
            status: SessionStatus::InProgress,
            message: String::new(),
        }
    }

    /// Fresh session for the same answer and rules
    #[must_use]
    pub fn restart(&self) -> Self {
        Self::new(self.answer.clone(), self.config.clone())
    }

    /// Dispatch one key event
    ///
    /// # Examples
    /// ```
    /// use wordle_share::core::Word;
    /// use wordle_share::game::{GameConfig, KeyInput, KeyOutcome, Session, SessionStatus};
    ///
    /// let mut session = Session::new(Word::new("crane").unwrap(), GameConfig::default());
    /// for c in "crane".chars() {
    ///     session.handle_key(KeyInput::Letter(c));
    /// }
    /// assert!(matches!(session.handle_key(KeyInput::Enter), KeyOutcome::Submitted(_)));
    /// assert_eq!(session.status(), SessionStatus::Won);
    /// ```
    pub fn handle_key(&mut self, key: KeyInput) -> KeyOutcome {
        match key {
            KeyInput::Letter(c) => {
                if self.push_letter(c) {
                    KeyOutcome::Typed
                } else {
                    KeyOutcome::Ignored
                }
            }
            KeyInput::Delete => {
                if self.delete_letter() {
                    KeyOutcome::Deleted
                } else {
                    KeyOutcome::Ignored
                }
            }
            KeyInput::Enter => {
                if self.status.is_over() {
                    return KeyOutcome::Ignored;
                }
                match self.submit() {
                    Ok(feedback) => KeyOutcome::Submitted(feedback),
                    Err(e) => KeyOutcome::Rejected(e),
                }
            }
        }
    }

    /// Type a letter into the current row
    ///
    /// Returns `false` when nothing changed: the row is full, the character
    /// isn't an ASCII letter, or the game is over.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if self.status.is_over() || self.col >= WORD_LENGTH || !letter.is_ascii_alphabetic() {
            return false;
        }
        self.board[self.row][self.col] = Some(letter.to_ascii_uppercase() as u8);
        self.col += 1;
        true
    }

    /// Remove the last typed letter of the current row
    pub fn delete_letter(&mut self) -> bool {
        if self.status.is_over() || self.col == 0 {
            return false;
        }
        self.col -= 1;
        self.board[self.row][self.col] = None;
        true
    }

    /// Submit the current row
    ///
    /// # Errors
    /// - `GuessError::GameOver` once the session is won or lost
    /// - `GuessError::NotEnoughLetters` when the row has fewer than 5 letters
    /// - `GuessError::NotInWordList` when a dictionary is configured and lacks the word
    ///
    /// No state changes on error, apart from the status message.
    pub fn submit(&mut self) -> Result<Feedback, GuessError> {
        let result = self.try_submit();
        if let Err(e) = &result
            && *e != GuessError::GameOver
        {
            self.message = e.to_string();
        }
        result
    }

    fn try_submit(&mut self) -> Result<Feedback, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }
        if self.col < WORD_LENGTH {
            return Err(GuessError::NotEnoughLetters);
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, tile) in letters.iter_mut().zip(self.board[self.row]) {
            *slot = tile.ok_or(GuessError::NotEnoughLetters)?;
        }
        // push_letter only stores uppercase A-Z
        let guess = Word::from_uppercase(letters);

        if let Some(dictionary) = &self.config.dictionary
            && !dictionary.contains(&guess)
        {
            debug!("rejected {guess}: not in dictionary");
            return Err(GuessError::NotInWordList(guess.text().to_string()));
        }

        let feedback = Feedback::evaluate(&guess, &self.answer);
        debug!("row {}: {guess} -> {feedback}", self.row + 1);

        self.keyboard.record(&guess, feedback);
        self.history.push((guess, feedback));

        if feedback.is_win() {
            self.status = SessionStatus::Won;
            self.message = "You got it!".to_string();
            info!("puzzle solved in {} guesses", self.history.len());
            return Ok(feedback);
        }

        self.row += 1;
        self.col = 0;
        if self.row == self.config.max_guesses {
            self.status = SessionStatus::Lost;
            self.message = format!("Answer was {}", self.answer);
            info!("out of guesses after {} rows", self.row);
        } else {
            self.message.clear();
        }

        Ok(feedback)
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Index of the row being typed (equals the guess count once lost)
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Index of the next tile in the current row
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.board.len()
    }

    /// Letter on a board tile, if any
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<char> {
        self.board
            .get(row)
            .and_then(|r| r.get(col).copied().flatten())
            .map(char::from)
    }

    /// Feedback for a committed row
    #[must_use]
    pub fn row_feedback(&self, row: usize) -> Option<Feedback> {
        self.history.get(row).map(|(_, feedback)| *feedback)
    }

    /// Letters typed in the current, uncommitted row
    #[must_use]
    pub fn pending(&self) -> String {
        (0..self.col).filter_map(|c| self.tile(self.row, c)).collect()
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// The answer, once the game is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.status.is_over().then_some(&self.answer)
    }

    /// Status line for the player
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Spoiler-free result grid, e.g. "Wordle 3/6" followed by emoji rows
    ///
    /// A lost game is scored as `X`.
    #[must_use]
    pub fn share_text(&self, title: &str) -> String {
        let score = match self.status {
            SessionStatus::Lost => "X".to_string(),
            _ => self.history.len().to_string(),
        };
        let mut text = format!("{title} {score}/{}\n", self.max_guesses());
        for (_, feedback) in &self.history {
            let _ = write!(text, "\n{}", feedback.to_emoji());
        }
        text
    }
}
