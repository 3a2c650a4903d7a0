//! Score a single guess
//!
//! Evaluates one guess against an answer without playing a full game.

use crate::core::{Feedback, Word};

/// Result of scoring a guess
pub struct ScoreResult {
    pub answer: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not exactly five letters A-Z.
pub fn score_guess(answer: &str, guess: &str) -> Result<ScoreResult, String> {
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let feedback = Feedback::evaluate(&guess, &answer);

    Ok(ScoreResult {
        answer,
        guess,
        feedback,
    })
}
