//! Game session state and input handling
//!
//! A `Session` owns everything about one puzzle attempt: the board, the
//! committed guesses, the keyboard aggregate and the win/loss status. Front
//! ends translate their own events into `KeyInput` and call `handle_key`.

mod config;
mod input;
mod session;
mod setup;

pub use config::GameConfig;
pub use input::{KeyInput, KeyOutcome};
pub use session::{GuessError, Session, SessionStatus};
pub use setup::PuzzleOptions;
