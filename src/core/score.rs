//! Per-letter scoring of a guess against a secret
//!
//! Implements standard Wordle two-pass matching:
//! 1. Hit pass: exact position matches are resolved first, every other
//!    secret letter goes into a remaining-count tally
//! 2. Present/Miss pass: a guess letter is Present only while the tally for
//!    that letter is positive, and each Present consumes one occurrence
//!
//! The tally is what keeps repeated guess letters from being awarded more
//! Presents than the secret has unmatched copies.

use super::word::{WORD_LENGTH, Word};
use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Classification of one guessed letter
///
/// Variants are declared weakest first, so `Ord` ranks how much a
/// classification tells the player (`Unknown < Miss < Present < Hit`).
///
/// On the wire a score is its integer code: Miss 0, Present 1, Hit 2 and
/// Unknown -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    /// Letter has not been played yet (keyboard tracking only)
    Unknown,
    /// Letter does not contribute to any remaining match
    Miss,
    /// Letter is in the secret at another position
    Present,
    /// Letter matches the secret at this position
    Hit,
}

impl Score {
    /// Integer code used on the wire
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::Unknown => -1,
            Self::Miss => 0,
            Self::Present => 1,
            Self::Hit => 2,
        }
    }

    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(Self::Unknown),
            0 => Some(Self::Miss),
            1 => Some(Self::Present),
            2 => Some(Self::Hit),
            _ => None,
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Self::from_code(code).ok_or_else(|| {
            de::Error::invalid_value(Unexpected::Signed(code), &"a score code from -1 to 2")
        })
    }
}

/// One scored position of a guess
///
/// The letter travels as its Unicode code point, e.g. `{"char":104,"score":0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterResult {
    #[serde(rename = "char", with = "code_point")]
    pub letter: char,
    pub score: Score,
}

impl LetterResult {
    #[must_use]
    pub const fn new(letter: char, score: Score) -> Self {
        Self { letter, score }
    }
}

mod code_point {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(letter: &char, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(u32::from(*letter))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<char, D::Error> {
        let code = u32::deserialize(deserializer)?;
        char::from_u32(code).ok_or_else(|| {
            de::Error::invalid_value(Unexpected::Unsigned(u64::from(code)), &"a Unicode code point")
        })
    }
}

/// A fully scored guess, in guess position order
pub type Feedback = [LetterResult; WORD_LENGTH];

/// Score `guess` against `secret`
///
/// # Examples
/// ```
/// use absurdle::core::{Score, Word, score_guess};
///
/// let secret = Word::new("hello").unwrap();
/// let guess = Word::new("allee").unwrap();
/// let scores: Vec<Score> = score_guess(&secret, &guess).iter().map(|r| r.score).collect();
///
/// // Both l's of "hello" are used up by the Hit and the one Present
/// assert_eq!(
///     scores,
///     [Score::Miss, Score::Present, Score::Hit, Score::Present, Score::Miss]
/// );
/// ```
#[must_use]
// Allow: Index needed to read both words and write result[i]
#[allow(clippy::needless_range_loop)]
pub fn score_guess(secret: &Word, guess: &Word) -> Feedback {
    let secret_letters = secret.letters();
    let guess_letters = guess.letters();

    let mut result = [LetterResult::new(' ', Score::Miss); WORD_LENGTH];
    let mut remaining = [0u8; 26];

    // Hit pass
    for i in 0..WORD_LENGTH {
        let letter = guess_letters[i];
        if letter == secret_letters[i] {
            result[i] = LetterResult::new(char::from(letter), Score::Hit);
        } else {
            remaining[letter_index(secret_letters[i])] += 1;
        }
    }

    // Present/Miss pass
    for i in 0..WORD_LENGTH {
        if result[i].score == Score::Hit {
            continue;
        }

        let letter = guess_letters[i];
        let count = &mut remaining[letter_index(letter)];
        let score = if *count > 0 {
            *count -= 1;
            Score::Present
        } else {
            Score::Miss
        };
        result[i] = LetterResult::new(char::from(letter), score);
    }

    result
}

/// True when every position is a Hit
#[must_use]
pub fn is_solved(feedback: &Feedback) -> bool {
    feedback.iter().all(|r| r.score == Score::Hit)
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}
