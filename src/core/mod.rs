//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: words, guess evaluation
//! and keyboard aggregation. Everything here is pure and independent of how a
//! puzzle is obtained or displayed.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterResult};
pub use keyboard::{KEYBOARD_ROWS, KeyState, Keyboard};
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Rows on the board
pub const MAX_GUESSES: usize = 6;
