//! Answer hidden in the link fragment
//!
//! The fragment is the word's base64 encoding written backwards, so the answer
//! isn't readable at a glance: `CRANE` -> `Q1JBTkU` -> `UkTBJ1Q`.

use super::{AnswerSource, PuzzleError};
use crate::core::Word;
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use url::Url;

/// Standard alphabet, written without padding, read with or without it
const CODEC: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Obfuscate a word for use as a link fragment
///
/// # Examples
/// ```
/// use wordle_share::core::Word;
/// use wordle_share::puzzle::{decode_fragment, encode_fragment};
///
/// let code = encode_fragment(&Word::new("crane").unwrap());
/// assert_eq!(code, "UkTBJ1Q");
/// assert_eq!(decode_fragment(&code).unwrap().text(), "CRANE");
/// ```
#[must_use]
pub fn encode_fragment(word: &Word) -> String {
    CODEC.encode(word.text()).chars().rev().collect()
}

/// Recover the word from a fragment code
///
/// Accepts a leading `#`, trailing padding and the URL-safe alphabet.
///
/// # Errors
/// - `PuzzleError::Missing` for an empty code
/// - `PuzzleError::Malformed` when the code isn't base64 or isn't UTF-8 text
/// - `PuzzleError::InvalidWord` when the decoded text isn't a five-letter word
pub fn decode_fragment(code: &str) -> Result<Word, PuzzleError> {
    let code = code.trim().trim_start_matches('#');
    if code.is_empty() {
        return Err(PuzzleError::Missing);
    }

    let unreversed: String = code
        .chars()
        .rev()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = CODEC
        .decode(unreversed.as_bytes())
        .map_err(|e| PuzzleError::Malformed(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| PuzzleError::Malformed(e.to_string()))?;

    Ok(Word::new(text)?)
}

#[derive(Debug, Clone)]
pub struct FragmentSource {
    url: Url,
}

impl FragmentSource {
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

impl AnswerSource for FragmentSource {
    fn name(&self) -> &'static str {
        "fragment"
    }

    fn answer(&self) -> Result<Word, PuzzleError> {
        let fragment = self.url.fragment().ok_or(PuzzleError::Missing)?;
        decode_fragment(fragment)
    }
}
