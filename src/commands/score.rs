//! Score command
//!
//! Scores a single guess against a known secret.

use crate::core::{Feedback, Word, WordError, score_guess};

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: String,
    pub guess: String,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn score_words(secret: &str, guess: &str) -> Result<ScoreResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = score_guess(&secret, &guess);

    Ok(ScoreResult {
        secret: secret.text().to_string(),
        guess: guess.text().to_string(),
        feedback,
    })
}
