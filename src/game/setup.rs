//! Choosing the puzzle and rules from player options

use super::GameConfig;
use crate::core::Word;
use crate::puzzle::{AnswerSource, DailySource, PuzzleError, PuzzleSource};
use crate::wordlists::{ANSWERS, Dictionary, loader::words_from_slice};
use chrono::NaiveDate;
use log::debug;

/// How the player asked for a puzzle
#[derive(Debug, Clone, Default)]
pub struct PuzzleOptions {
    /// Shared link; absent means no puzzle unless `daily` is set
    pub link: Option<String>,
    pub daily: bool,
    /// Day of the daily puzzle; implies `daily`
    pub date: Option<NaiveDate>,
    /// Check guesses against the word list
    pub strict: bool,
    /// Custom daily answers, always accepted as guesses
    pub words: Option<Vec<Word>>,
}

impl PuzzleOptions {
    #[must_use]
    pub const fn is_daily(&self) -> bool {
        self.daily || self.date.is_some()
    }

    /// Resolve the answer source and game rules
    ///
    /// `today` is the daily date when none is given. Without a link or daily
    /// flag the link is empty, so the source reports `PuzzleError::Missing`.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidLink` if the link can't be parsed.
    ///
    /// # Examples
    /// ```
    /// use wordle_share::game::PuzzleOptions;
    /// use wordle_share::puzzle::AnswerSource;
    /// use chrono::NaiveDate;
    ///
    /// let options = PuzzleOptions {
    ///     link: Some("?word=crane".to_string()),
    ///     ..PuzzleOptions::default()
    /// };
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let (source, config) = options.resolve(today).unwrap();
    /// assert_eq!(source.answer().unwrap().text(), "CRANE");
    /// assert!(config.dictionary.is_none());
    /// ```
    pub fn resolve(self, today: NaiveDate) -> Result<(PuzzleSource, GameConfig), PuzzleError> {
        let source = if self.is_daily() {
            let words = self
                .words
                .clone()
                .unwrap_or_else(|| words_from_slice(ANSWERS));
            let daily = DailySource::new(self.date.unwrap_or(today), words);
            debug!("daily puzzle for {}", daily.date());
            PuzzleSource::Daily(daily)
        } else {
            PuzzleSource::from_link(self.link.as_deref().unwrap_or_default())?
        };

        let mut config = GameConfig::new();
        if self.strict {
            let mut dictionary = Dictionary::embedded();
            if let Some(words) = self.words {
                dictionary.extend(words);
            }
            // The answer itself is always a valid guess
            if let Ok(answer) = source.answer() {
                dictionary.extend([answer]);
            }
            debug!("dictionary check on, {} words", dictionary.len());
            config = config.with_dictionary(dictionary);
        }

        Ok((source, config))
    }
}
