//! Feedback pattern summary used as the adversary's grouping key
//!
//! A pattern records the per-position classification codes of a scored guess:
//! - 0 = Miss
//! - 1 = Present
//! - 2 = Hit
//!
//! together with the derived Hit and Present counts. Two candidates that give
//! the same pattern for a guess are indistinguishable to the player.
//!
//! Field order matters: the derived `Ord` compares `hits`, then `presents`,
//! then the position codes, which is the enumeration order the adversary
//! scans groups in.

use super::score::{Feedback, Score};
use super::word::WORD_LENGTH;
use std::fmt;

/// Summary of a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedbackPattern {
    hits: u8,
    presents: u8,
    positions: [u8; WORD_LENGTH],
}

impl FeedbackPattern {
    /// Summarize a scored guess
    ///
    /// # Examples
    /// ```
    /// use absurdle::core::{FeedbackPattern, Word, score_guess};
    ///
    /// let secret = Word::new("world").unwrap();
    /// let guess = Word::new("hello").unwrap();
    /// let pattern = FeedbackPattern::from_feedback(&score_guess(&secret, &guess));
    ///
    /// assert_eq!(pattern.positions(), &[0, 0, 0, 2, 1]);
    /// assert_eq!(pattern.hits(), 1);
    /// assert_eq!(pattern.presents(), 1);
    /// ```
    #[must_use]
    pub fn from_feedback(feedback: &Feedback) -> Self {
        let mut pattern = Self {
            hits: 0,
            presents: 0,
            positions: [0; WORD_LENGTH],
        };

        for (code, result) in pattern.positions.iter_mut().zip(feedback) {
            match result.score {
                Score::Hit => {
                    *code = 2;
                    pattern.hits += 1;
                }
                Score::Present => {
                    *code = 1;
                    pattern.presents += 1;
                }
                Score::Miss | Score::Unknown => *code = 0,
            }
        }

        pattern
    }

    /// Number of exact position matches
    #[inline]
    #[must_use]
    pub const fn hits(&self) -> u8 {
        self.hits
    }

    /// Number of right-letter, wrong-position matches
    #[inline]
    #[must_use]
    pub const fn presents(&self) -> u8 {
        self.presents
    }

    /// Per-position classification codes
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &[u8; WORD_LENGTH] {
        &self.positions
    }

    /// Check if this is a perfect match (all Hits)
    #[inline]
    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.hits as usize == WORD_LENGTH
    }

    /// Convert pattern to emoji string, e.g. "⬜🟨⬜🟩⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.positions
            .iter()
            .map(|&code| match code {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
