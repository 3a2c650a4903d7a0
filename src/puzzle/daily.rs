//! Answer of the day, picked from a fixed list

use super::{AnswerSource, PuzzleError};
use crate::core::Word;
use crate::wordlists::ANSWERS;
use crate::wordlists::loader::words_from_slice;
use chrono::{Local, NaiveDate};

/// Day zero of the daily list
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2021, 6, 19) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Selects `words[days_since_epoch % words.len()]`
#[derive(Debug, Clone)]
pub struct DailySource {
    date: NaiveDate,
    epoch: NaiveDate,
    words: Vec<Word>,
}

impl DailySource {
    #[must_use]
    pub const fn new(date: NaiveDate, words: Vec<Word>) -> Self {
        Self {
            date,
            epoch: EPOCH,
            words,
        }
    }

    /// Today's puzzle (local time) from the embedded answer list
    #[must_use]
    pub fn today() -> Self {
        Self::new(Local::now().date_naive(), words_from_slice(ANSWERS))
    }

    /// Count days from a different starting date
    #[must_use]
    pub fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whole days between the epoch and the puzzle date
    ///
    /// # Errors
    /// Returns `PuzzleError::BeforeEpoch` for dates earlier than the epoch.
    pub fn puzzle_number(&self) -> Result<usize, PuzzleError> {
        let days = self.date.signed_duration_since(self.epoch).num_days();
        usize::try_from(days).map_err(|_| PuzzleError::BeforeEpoch(self.date))
    }
}

impl AnswerSource for DailySource {
    fn name(&self) -> &'static str {
        "daily"
    }

    fn answer(&self) -> Result<Word, PuzzleError> {
        if self.words.is_empty() {
            return Err(PuzzleError::EmptyWordList);
        }
        let index = self.puzzle_number()? % self.words.len();
        Ok(self.words[index].clone())
    }

    fn title(&self) -> String {
        match self.puzzle_number() {
            Ok(number) => format!("Wordle #{number}"),
            Err(_) => "Wordle".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn epoch_day_is_first_word() {
        let source = DailySource::new(EPOCH, words(&["cigar", "rebut", "sissy"]));
        assert_eq!(source.puzzle_number().unwrap(), 0);
        assert_eq!(source.answer().unwrap().text(), "CIGAR");
    }

    #[test]
    fn advances_one_word_per_day() {
        let source = DailySource::new(date(2021, 6, 21), words(&["cigar", "rebut", "sissy"]));
        assert_eq!(source.answer().unwrap().text(), "SISSY");
    }

    #[test]
    fn wraps_around_the_list() {
        let source = DailySource::new(date(2021, 6, 22), words(&["cigar", "rebut", "sissy"]));
        assert_eq!(source.puzzle_number().unwrap(), 3);
        assert_eq!(source.answer().unwrap().text(), "CIGAR");
    }

    #[test]
    fn same_date_same_answer() {
        let a = DailySource::new(date(2025, 1, 1), words_from_slice(ANSWERS));
        let b = DailySource::new(date(2025, 1, 1), words_from_slice(ANSWERS));
        assert_eq!(a.answer(), b.answer());
    }

    #[test]
    fn before_epoch_has_no_puzzle() {
        let day = date(2021, 6, 18);
        let source = DailySource::new(day, words(&["cigar"]));
        assert_eq!(source.answer(), Err(PuzzleError::BeforeEpoch(day)));
        assert_eq!(source.title(), "Wordle");
    }

    #[test]
    fn empty_list_has_no_puzzle() {
        let source = DailySource::new(EPOCH, Vec::new());
        assert_eq!(source.answer(), Err(PuzzleError::EmptyWordList));
    }

    #[test]
    fn custom_epoch() {
        let source = DailySource::new(date(2024, 1, 2), words(&["cigar", "rebut"]))
            .with_epoch(date(2024, 1, 1));
        assert_eq!(source.answer().unwrap().text(), "REBUT");
        assert_eq!(source.title(), "Wordle #1");
    }
}
