//! Word lists
//!
//! Provides the embedded daily answer list and the dictionary of accepted
//! guesses, both compiled into the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
