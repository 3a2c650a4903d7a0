//! Embedded word lists
//!
//! Daily answers and accepted guesses, compiled into the binary by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
