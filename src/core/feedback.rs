//! Guess evaluation and the per-position feedback it produces
//!
//! Each position of a guess is classified as:
//! - Correct (green): same letter in the same position of the answer
//! - Present (yellow): letter appears at another, not yet credited, answer position
//! - Absent (gray): no unconsumed answer position holds the letter

use super::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Classification of a single guessed letter
///
/// Ordered by priority: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterResult {
    /// Gray
    Absent,
    /// Yellow
    Present,
    /// Green
    Correct,
}

impl LetterResult {
    /// Square emoji used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single ASCII character: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const WIN: Self = Self([LetterResult::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `answer`
    ///
    /// Total over well-formed words. Each answer letter is credited to at most
    /// one guess position, and duplicate guess letters are resolved left to right.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and consume those answer positions
    /// 2. Second pass: for every other position, take the leftmost unconsumed
    ///    answer position with the same letter (Present), else Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_share::core::{Feedback, Word};
    ///
    /// let answer = Word::new("alley").unwrap();
    /// let guess = Word::new("llama").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &answer);
    ///
    /// assert_eq!(feedback.to_string(), "YGY--");
    /// ```
    #[must_use]
    // Allow: index needed to read guess[i], answer[i] and write result[i] together
    #[allow(clippy::needless_range_loop)]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();
        let mut result = [LetterResult::Absent; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                result[i] = LetterResult::Correct;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if result[i] == LetterResult::Correct {
                continue;
            }
            let found = (0..WORD_LENGTH).find(|&j| !consumed[j] && answer[j] == guess[i]);
            if let Some(j) = found {
                result[i] = LetterResult::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    /// Per-position results
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Result at a specific position (0-4)
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> LetterResult {
        self.0[position]
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&r| r == LetterResult::Correct).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&r| r == LetterResult::Present).count()
    }

    /// Convert to emoji squares, e.g. "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_share::core::Feedback;
    ///
    /// let f: Feedback = "GY-GY".parse().unwrap();
    /// assert_eq!(f.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

/// Parses "GY-GY" style strings, or the emoji squares
impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: Option<Vec<LetterResult>> = s.chars().map(LetterResult::from_symbol).collect();
        parsed
            .and_then(|results| <[LetterResult; WORD_LENGTH]>::try_from(results).ok())
            .map(Self)
            .ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.0 {
            write!(f, "{}", result.symbol())?;
        }
        Ok(())
    }
}
