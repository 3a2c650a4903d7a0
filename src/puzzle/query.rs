//! Answer carried in plain sight: `?word=CRANE`

use super::{AnswerSource, PuzzleError};
use crate::core::Word;
use url::Url;

/// Name of the query parameter holding the word
pub const WORD_PARAM: &str = "word";

#[derive(Debug, Clone)]
pub struct QuerySource {
    url: Url,
}

impl QuerySource {
    #[must_use]
    pub const fn new(url: Url) -> Self {
        Self { url }
    }

    /// # Errors
    /// Returns `PuzzleError::InvalidLink` if the link can't be parsed.
    pub fn from_link(link: &str) -> Result<Self, PuzzleError> {
        super::parse_link(link).map(Self::new)
    }
}

impl AnswerSource for QuerySource {
    fn name(&self) -> &'static str {
        "query"
    }

    fn answer(&self) -> Result<Word, PuzzleError> {
        let value = self
            .url
            .query_pairs()
            .find(|(key, _)| key == WORD_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .ok_or(PuzzleError::Missing)?;

        Ok(Word::new(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    fn answer(link: &str) -> Result<Word, PuzzleError> {
        QuerySource::from_link(link).unwrap().answer()
    }

    #[test]
    fn reads_word_case_insensitively() {
        assert_eq!(answer("https://x.test/?word=crane").unwrap().text(), "CRANE");
        assert_eq!(answer("https://x.test/?word=CrAnE").unwrap().text(), "CRANE");
    }

    #[test]
    fn ignores_other_parameters() {
        let word = answer("https://x.test/?lang=en&word=alley&theme=dark").unwrap();
        assert_eq!(word.text(), "ALLEY");
    }

    #[test]
    fn missing_or_empty_word() {
        assert_eq!(answer("https://x.test/"), Err(PuzzleError::Missing));
        assert_eq!(answer("https://x.test/?word="), Err(PuzzleError::Missing));
        assert_eq!(answer("https://x.test/?other=crane"), Err(PuzzleError::Missing));
    }

    #[test]
    fn rejects_bad_words() {
        assert_eq!(
            answer("https://x.test/?word=cranes"),
            Err(PuzzleError::InvalidWord(WordError::InvalidLength(6)))
        );
        assert_eq!(
            answer("https://x.test/?word=cr4ne"),
            Err(PuzzleError::InvalidWord(WordError::InvalidCharacters))
        );
    }

    #[test]
    fn percent_encoded_word_is_decoded() {
        assert_eq!(answer("https://x.test/?word=%43rane").unwrap().text(), "CRANE");
    }
}
