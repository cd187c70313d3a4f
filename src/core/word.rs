//! Game word representation
//!
//! A `Word` is a validated, lowercased 5-letter ASCII word. Guesses and
//! candidates share this type, so every word that reaches the scorer has
//! already passed length and alphabet checks.

use std::fmt;
use thiserror::Error;

/// Number of letters in every game word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter game word
///
/// Ordering and hashing follow the text, so words can key maps and sets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for rejected words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased first, so guesses are case-insensitive.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::Word;
    ///
    /// let word = Word::new("PANIC").unwrap();
    /// assert_eq!(word.text(), "panic");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("hello").unwrap();
        assert_eq!(word.text(), "hello");
        assert_eq!(word.letters(), b"hello");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("FANCY").unwrap().text(), "fancy");
        assert_eq!(Word::new("FaNcY").unwrap().text(), "fancy");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        assert_eq!(Word::new("héllo"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("héllos"), Err(WordError::InvalidLength(6)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("buggy").unwrap();
        assert_eq!(word.letter_at(0), b'b');
        assert_eq!(word.letter_at(2), b'g');
        assert_eq!(word.letter_at(4), b'y');
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Crazy".parse().unwrap();
        assert_eq!(format!("{word}"), "crazy");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("panic").unwrap(), Word::new("PANIC").unwrap());
        assert_ne!(Word::new("panic").unwrap(), Word::new("fancy").unwrap());
    }
}
