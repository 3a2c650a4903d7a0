//! Wordle Share
//!
//! A Wordle clone whose puzzles are shared as links: the answer travels in a
//! `?word=` query, hidden in a `#fragment`, or comes from the daily list.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_share::core::{Feedback, Word};
//! use wordle_share::puzzle::{AnswerSource, PuzzleSource};
//!
//! let source = PuzzleSource::from_link("https://example.com/?word=alley").unwrap();
//! let answer = source.answer().unwrap();
//!
//! let guess = Word::new("llama").unwrap();
//! let feedback = Feedback::evaluate(&guess, &answer);
//! assert_eq!(feedback.to_string(), "YGY--");
//! ```

// Core domain types
pub mod core;

// Game session and key dispatch
pub mod game;

// Answer sources and link sharing
pub mod puzzle;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
