//! Per-letter keyboard state
//!
//! A pure fold over the guess history keeping, for every letter, the most
//! informative classification it has ever received. Letters never played
//! stay `Unknown`.

use super::formatters::colorize_letter;
use crate::core::{Feedback, Score};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Score; 26],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self {
            letters: [Score::Unknown; 26],
        }
    }
}

impl KeyboardState {
    /// Fold every round of `history` into a keyboard
    #[must_use]
    pub fn from_history(history: &[Feedback]) -> Self {
        history.iter().fold(Self::default(), |mut state, feedback| {
            state.record(feedback);
            state
        })
    }

    /// Merge one round, never downgrading a letter
    pub fn record(&mut self, feedback: &Feedback) {
        for result in feedback {
            if let Some(slot) = self.slot_mut(result.letter) {
                *slot = (*slot).max(result.score);
            }
        }
    }

    /// Best classification seen for `letter`
    #[must_use]
    pub fn get(&self, letter: char) -> Score {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.letters[usize::from(letter as u8 - b'a')]
        } else {
            Score::Unknown
        }
    }

    /// Render as three colored QWERTY rows
    #[must_use]
    pub fn render(&self) -> String {
        KEYBOARD_ROWS
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| colorize_letter(c, self.get(c)).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn slot_mut(&mut self, letter: char) -> Option<&mut Score> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            Some(&mut self.letters[usize::from(letter as u8 - b'a')])
        } else {
            None
        }
    }
}
