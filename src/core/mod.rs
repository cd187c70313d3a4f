//! Core domain types for the game
//!
//! Words, per-letter scoring and the feedback pattern summary. Everything here
//! is pure: no I/O, no shared state.

mod pattern;
mod score;
mod word;

pub use pattern::FeedbackPattern;
pub use score::{Feedback, LetterResult, Score, is_solved, score_guess};
pub use word::{WORD_LENGTH, Word, WordError};
