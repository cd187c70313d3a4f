//! Word lists for new games
//!
//! Provides the built-in lists and loading from CSV or newline-delimited
//! files.

mod embedded;
pub mod loader;

use crate::core::Word;
use crate::game::Variant;

pub use embedded::{ABSURDLE_WORDS, WORDLE_WORDS};
pub use loader::LoadError;

/// Built-in word list for a variant
#[must_use]
pub fn builtin(variant: Variant) -> Vec<Word> {
    match variant {
        Variant::Absurdle => loader::words_from_slice(ABSURDLE_WORDS),
        Variant::Wordle => loader::words_from_slice(WORDLE_WORDS),
    }
}
