//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackPattern, LetterResult, Score};
use colored::{ColoredString, Colorize};

/// Color one letter by its classification
#[must_use]
pub fn colorize_letter(letter: char, score: Score) -> ColoredString {
    let text = letter.to_ascii_uppercase().to_string();
    match score {
        Score::Hit => text.green().bold(),
        Score::Present => text.yellow().bold(),
        Score::Miss => text.bright_black().bold(),
        Score::Unknown => text.normal(),
    }
}

/// Render a scored guess as colored uppercase letters
#[must_use]
pub fn colorize_feedback(feedback: &[LetterResult]) -> String {
    feedback
        .iter()
        .map(|r| colorize_letter(r.letter, r.score).to_string())
        .collect()
}

/// Format a scored guess as an emoji row
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    FeedbackPattern::from_feedback(feedback).to_emoji()
}

/// Join words as uppercase, comma-separated
#[must_use]
pub fn word_list(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}
