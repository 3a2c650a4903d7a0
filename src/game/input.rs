//! Discrete key events fed into a session

use super::GuessError;
use crate::core::Feedback;

/// A single key press, independent of the front end that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Letter(char),
    Delete,
    Enter,
}

impl KeyInput {
    /// Map a typed character: letters only, anything else is `None`
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then_some(Self::Letter(c))
    }
}

/// What a key press did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Typed,
    Deleted,
    Submitted(Feedback),
    Rejected(GuessError),
    /// Row full, nothing to delete, not a letter, or game over
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_accepts_letters_only() {
        assert_eq!(KeyInput::from_char('a'), Some(KeyInput::Letter('a')));
        assert_eq!(KeyInput::from_char('Z'), Some(KeyInput::Letter('Z')));
        assert_eq!(KeyInput::from_char('1'), None);
        assert_eq!(KeyInput::from_char('é'), None);
    }
}
