//! Game rules

use crate::core::MAX_GUESSES;
use crate::wordlists::Dictionary;

/// Configuration for a game session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub max_guesses: usize,
    /// When set, guesses outside the dictionary are rejected
    pub dictionary: Option<Dictionary>,
}

impl GameConfig {
    /// Standard six-guess game without a dictionary check
    ///
    /// Shared puzzles carry custom words, so any five letters are accepted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            dictionary: None,
        }
    }

    /// Reject guesses that aren't in `dictionary`
    #[must_use]
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Override the number of rows; at least one row is always kept
    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses.max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
