//! Building links that the link sources read back

use super::query::WORD_PARAM;
use super::{PuzzleError, encode_fragment};
use crate::core::Word;
use url::Url;

/// Base used when no `--base` is given
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Link with the word in plain sight: `BASE?word=CRANE`
///
/// Any `word` parameter or fragment already on `base` is replaced.
///
/// # Errors
/// Returns `PuzzleError::InvalidLink` if `base` isn't an absolute URL.
pub fn query_link(base: &str, word: &Word) -> Result<String, PuzzleError> {
    let mut url = base_url(base)?;
    url.set_fragment(None);
    url.query_pairs_mut().append_pair(WORD_PARAM, word.text());
    Ok(url.into())
}

/// Link with the word obfuscated in the fragment: `BASE#UkTBJ1Q`
///
/// # Errors
/// Returns `PuzzleError::InvalidLink` if `base` isn't an absolute URL.
pub fn fragment_link(base: &str, word: &Word) -> Result<String, PuzzleError> {
    let mut url = base_url(base)?;
    url.set_fragment(Some(&encode_fragment(word)));
    Ok(url.into())
}

/// Parse `base` and drop any existing `word` parameter
fn base_url(base: &str) -> Result<Url, PuzzleError> {
    let mut url = Url::parse(base.trim())?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != WORD_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
    Ok(url)
}
