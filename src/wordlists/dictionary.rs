//! Set of accepted guesses

use super::ALLOWED;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Words a player may guess when the dictionary check is on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    /// Build from raw strings, skipping anything that isn't a valid word
    ///
    /// # Examples
    /// ```
    /// use wordle_share::core::Word;
    /// use wordle_share::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["crane", "slate", "oops"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains(&Word::new("CRANE").unwrap()));
    /// ```
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words.into_iter().filter_map(|w| Word::new(w).ok()).collect(),
        }
    }

    /// The embedded list of allowed guesses
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(ALLOWED.iter().copied())
    }

    /// Add more words, e.g. the answers of a custom daily list
    pub fn extend(&mut self, words: impl IntoIterator<Item = Word>) {
        self.words.extend(words);
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
