//! Where the answer comes from
//!
//! A puzzle is either shared as a link (the word in the `?word=` query, or
//! obfuscated in the `#fragment`) or picked from the daily list by date.
//! All sources implement `AnswerSource`; `PuzzleSource` selects one at runtime.

mod daily;
mod fragment;
mod query;
pub mod share;

pub use daily::{DailySource, EPOCH};
pub use fragment::{FragmentSource, decode_fragment, encode_fragment};
pub use query::QuerySource;

use crate::core::{Word, WordError};
use chrono::NaiveDate;
use log::debug;
use thiserror::Error;
use url::Url;

/// Why no puzzle could be produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("No puzzle word provided. Ask your friend for the link.")]
    Missing,
    #[error("Invalid puzzle link: {0}")]
    InvalidLink(#[from] url::ParseError),
    #[error("Invalid puzzle word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("Puzzle code is malformed: {0}")]
    Malformed(String),
    #[error("No daily puzzle before the epoch, got {0}")]
    BeforeEpoch(NaiveDate),
    #[error("Daily word list is empty")]
    EmptyWordList,
}

/// A way of obtaining the answer
pub trait AnswerSource {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Resolve the answer
    ///
    /// # Errors
    /// Returns `PuzzleError` when the source holds no usable word; the caller
    /// should show the "no puzzle" state and accept no input.
    fn answer(&self) -> Result<Word, PuzzleError>;

    /// Heading for share text
    fn title(&self) -> String {
        "Wordle".to_string()
    }
}

/// Runtime choice of answer source, keeping static dispatch
#[derive(Debug, Clone)]
pub enum PuzzleSource {
    Query(QuerySource),
    Fragment(FragmentSource),
    Daily(DailySource),
}

impl PuzzleSource {
    /// Pick the source for a shared link: a non-empty fragment wins over the query
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidLink` if the link can't be parsed.
    pub fn from_link(link: &str) -> Result<Self, PuzzleError> {
        let url = parse_link(link)?;
        let source = if url.fragment().is_some_and(|f| !f.is_empty()) {
            Self::Fragment(FragmentSource::new(url))
        } else {
            Self::Query(QuerySource::new(url))
        };
        debug!("link resolved to {} source", source.name());
        Ok(source)
    }
}

impl AnswerSource for PuzzleSource {
    fn name(&self) -> &'static str {
        match self {
            Self::Query(s) => s.name(),
            Self::Fragment(s) => s.name(),
            Self::Daily(s) => s.name(),
        }
    }

    fn answer(&self) -> Result<Word, PuzzleError> {
        match self {
            Self::Query(s) => s.answer(),
            Self::Fragment(s) => s.answer(),
            Self::Daily(s) => s.answer(),
        }
    }

    fn title(&self) -> String {
        match self {
            Self::Query(s) => s.title(),
            Self::Fragment(s) => s.title(),
            Self::Daily(s) => s.title(),
        }
    }
}

/// Parse an absolute link, or a relative one such as `?word=crane` or `#UkTBJ1Q`
pub(crate) fn parse_link(link: &str) -> Result<Url, PuzzleError> {
    match Url::parse(link.trim()) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("http://localhost/")?;
            Ok(base.join(link.trim())?)
        }
        Err(e) => Err(e.into()),
    }
}
