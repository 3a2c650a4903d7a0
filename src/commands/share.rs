//! Create links for a puzzle word

use crate::core::Word;
use crate::puzzle::share::{fragment_link, query_link};
use log::debug;
use rand::seq::IndexedRandom;

/// Configuration for sharing a word
pub struct ShareConfig {
    /// Word to share; `None` picks a random one from `pool`
    pub word: Option<String>,
    pub base_url: String,
}

/// Links for one word
pub struct ShareResult {
    pub word: Word,
    pub query_link: String,
    pub fragment_link: String,
}

/// Build both link styles for the configured word
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters A-Z)
/// - No word is given and the pool is empty
/// - The base URL is not an absolute URL
pub fn share_word(config: &ShareConfig, pool: &[Word]) -> Result<ShareResult, String> {
    let word = match &config.word {
        Some(text) => Word::new(text).map_err(|e| format!("Invalid word: {e}"))?,
        None => pool
            .choose(&mut rand::rng())
            .cloned()
            .ok_or("No words to pick from")?,
    };
    debug!("sharing with base {}", config.base_url);

    let query_link = query_link(&config.base_url, &word).map_err(|e| e.to_string())?;
    let fragment_link = fragment_link(&config.base_url, &word).map_err(|e| e.to_string())?;

    Ok(ShareResult {
        word,
        query_link,
        fragment_link,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn config(word: Option<&str>) -> ShareConfig {
        ShareConfig {
            word: word.map(str::to_string),
            base_url: "https://x.test/".to_string(),
        }
    }

    #[test]
    fn share_given_word() {
        let result = share_word(&config(Some("crane")), &[]).unwrap();
        assert_eq!(result.word.text(), "CRANE");
        assert_eq!(result.query_link, "https://x.test/?word=CRANE");
        assert_eq!(result.fragment_link, "https://x.test/#UkTBJ1Q");
    }

    #[test]
    fn share_random_word_from_pool() {
        let pool = words_from_slice(&["zesty", "alley"]);
        let result = share_word(&config(None), &pool).unwrap();
        assert!(pool.contains(&result.word));
    }

    #[test]
    fn share_random_from_empty_pool_fails() {
        assert!(share_word(&config(None), &[]).is_err());
    }

    #[test]
    fn share_invalid_word_fails() {
        assert!(share_word(&config(Some("abc")), &[]).is_err());
    }

    #[test]
    fn share_bad_base_fails() {
        let mut cfg = config(Some("crane"));
        cfg.base_url = "not a url".to_string();
        assert!(share_word(&cfg, &[]).is_err());
    }
}
