//! On-screen keyboard state
//!
//! Aggregates the feedback of every submitted guess into one state per letter.
//! A key's state only ever moves up: Absent -> Present -> Correct.

use super::{Feedback, LetterResult, Word};

/// Keyboard rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Aggregated state of a single key, ordered by priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyState {
    Absent,
    Present,
    Correct,
}

impl From<LetterResult> for KeyState {
    fn from(result: LetterResult) -> Self {
        match result {
            LetterResult::Absent => Self::Absent,
            LetterResult::Present => Self::Present,
            LetterResult::Correct => Self::Correct,
        }
    }
}

/// Per-letter key states for A-Z; `None` means the letter hasn't been guessed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    keys: [Option<KeyState>; 26],
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the key states
    ///
    /// Correct is permanent, Present overrides Absent or unset, and Absent is
    /// only recorded for a key with no state yet.
    pub fn record(&mut self, guess: &Word, feedback: Feedback) {
        for (&letter, &result) in guess.letters().iter().zip(feedback.results()) {
            self.mark(letter, result.into());
        }
    }

    /// Apply a single key update under the non-downgrade rule
    pub fn mark(&mut self, letter: u8, state: KeyState) {
        if let Some(slot) = Self::index(letter).map(|i| &mut self.keys[i]) {
            // None < Some(Absent) < Some(Present) < Some(Correct)
            *slot = (*slot).max(Some(state));
        }
    }

    /// Current state of a letter (either case); `None` for untouched or non-letters
    #[must_use]
    pub fn state(&self, letter: u8) -> Option<KeyState> {
        Self::index(letter).and_then(|i| self.keys[i])
    }

    /// All letters touched so far, in alphabetical order
    pub fn touched(&self) -> impl Iterator<Item = (char, KeyState)> + '_ {
        (b'A'..=b'Z')
            .zip(self.keys.iter())
            .filter_map(|(letter, state)| state.map(|s| (char::from(letter), s)))
    }

    fn index(letter: u8) -> Option<usize> {
        let letter = letter.to_ascii_uppercase();
        letter
            .is_ascii_uppercase()
            .then(|| usize::from(letter - b'A'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(keyboard: &mut Keyboard, guess: &str, feedback: &str) {
        keyboard.record(&Word::new(guess).unwrap(), feedback.parse().unwrap());
    }

    #[test]
    fn starts_untouched() {
        let keyboard = Keyboard::new();
        assert_eq!(keyboard.state(b'A'), None);
        assert_eq!(keyboard.touched().count(), 0);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "crane", "G----");
        record(&mut keyboard, "occur", "-Y---");
        record(&mut keyboard, "cccxx", "-----");
        assert_eq!(keyboard.state(b'C'), Some(KeyState::Correct));
    }

    #[test]
    fn present_overrides_absent() {
        let mut keyboard = Keyboard::new();
        keyboard.mark(b'E', KeyState::Absent);
        keyboard.mark(b'E', KeyState::Present);
        assert_eq!(keyboard.state(b'E'), Some(KeyState::Present));
        keyboard.mark(b'E', KeyState::Absent);
        assert_eq!(keyboard.state(b'E'), Some(KeyState::Present));
    }

    #[test]
    fn duplicate_letter_in_one_row_keeps_best() {
        // LLAMA vs ALLEY: L is both Present and Correct, A Present and Absent
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "llama", "YGY--");
        assert_eq!(keyboard.state(b'L'), Some(KeyState::Correct));
        assert_eq!(keyboard.state(b'A'), Some(KeyState::Present));
        assert_eq!(keyboard.state(b'M'), Some(KeyState::Absent));
    }

    #[test]
    fn lowercase_lookup_and_non_letters() {
        let mut keyboard = Keyboard::new();
        keyboard.mark(b'q', KeyState::Absent);
        assert_eq!(keyboard.state(b'Q'), Some(KeyState::Absent));
        keyboard.mark(b'1', KeyState::Correct);
        assert_eq!(keyboard.state(b'1'), None);
    }

    #[test]
    fn touched_lists_letters_alphabetically() {
        let mut keyboard = Keyboard::new();
        record(&mut keyboard, "crane", "--G-G");
        let touched: String = keyboard.touched().map(|(c, _)| c).collect();
        assert_eq!(touched, "ACENR");
    }

    #[test]
    fn layout_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        let expected: Vec<char> = ('A'..='Z').collect();
        assert_eq!(letters, expected);
    }
}
