//! Command implementations

pub mod score;
pub mod share;
pub mod simple;

pub use score::{ScoreResult, score_guess};
pub use share::{ShareConfig, ShareResult, share_word};
pub use simple::{play_lines, run_simple};
