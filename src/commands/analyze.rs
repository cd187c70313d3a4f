//! Guess analysis command
//!
//! Shows every feedback group a guess splits the word list into and which
//! one the adversary would answer with.

use crate::core::{Feedback, FeedbackPattern, Word, WordError};
use crate::engine::group_by_pattern;

/// One feedback group of an analyzed guess
pub struct GroupSummary {
    pub pattern: FeedbackPattern,
    pub feedback: Feedback,
    pub members: Vec<String>,
    /// The adversary's pick
    pub chosen: bool,
}

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    pub total_candidates: usize,
    /// Groups in ascending pattern order
    pub groups: Vec<GroupSummary>,
}

impl AnalysisResult {
    /// The group the adversary would keep
    #[must_use]
    pub fn chosen(&self) -> Option<&GroupSummary> {
        self.groups.iter().find(|group| group.chosen)
    }
}

/// Partition `candidates` by `guess`
///
/// The guess does not have to be one of the candidates.
///
/// # Errors
///
/// Returns an error if the guess is not a valid 5-letter word.
pub fn analyze_guess(guess: &str, candidates: &[Word]) -> Result<AnalysisResult, WordError> {
    let guess_word = Word::new(guess)?;
    let partition = group_by_pattern(&guess_word, candidates);
    let chosen = partition.least_helpful_pattern();

    let groups = partition
        .iter()
        .map(|(pattern, group)| GroupSummary {
            pattern: *pattern,
            feedback: group.feedback,
            members: group.members.iter().map(|w| w.text().to_string()).collect(),
            chosen: chosen.as_ref() == Some(pattern),
        })
        .collect();

    Ok(AnalysisResult {
        guess: guess_word.text().to_string(),
        total_candidates: candidates.len(),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::ABSURDLE_WORDS;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_hello_over_builtin_list() {
        let words = words_from_slice(ABSURDLE_WORDS);
        let result = analyze_guess("HELLO", &words).unwrap();

        assert_eq!(result.guess, "hello");
        assert_eq!(result.total_candidates, 8);
        assert_eq!(result.groups.len(), 5);
        assert_eq!(
            result.groups.iter().map(|g| g.members.len()).sum::<usize>(),
            8
        );

        let chosen = result.chosen().unwrap();
        assert_eq!(chosen.members, ["fancy", "panic", "crazy", "buggy"]);
        assert_eq!(result.groups.iter().filter(|g| g.chosen).count(), 1);
    }

    #[test]
    fn groups_are_in_pattern_order() {
        let words = words_from_slice(ABSURDLE_WORDS);
        let result = analyze_guess("world", &words).unwrap();
        assert!(result.groups.windows(2).all(|w| w[0].pattern < w[1].pattern));
    }

    #[test]
    fn analyze_invalid_word() {
        let words = words_from_slice(ABSURDLE_WORDS);
        assert!(analyze_guess("zzz", &words).is_err());
    }
}
