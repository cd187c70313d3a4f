//! Least-helpful group selection
//!
//! The adversary answers every guess with the feedback group that tells the
//! player the least. Groups are ranked by Hit count, then Present count:
//! fewer is less helpful.
//!
//! Groups are scanned in ascending pattern order from a sentinel worse than
//! any real pattern. A group replaces the running best when it has fewer
//! Hits, or equal Hits and *no more* Presents. Because of the non-strict
//! Present comparison, the last group tied on `(hits, presents)` in scan
//! order wins, i.e. the one with the largest position codes.

use super::partition::{Group, Partition, group_by_pattern};
use crate::core::{Feedback, FeedbackPattern, WORD_LENGTH, Word};
use thiserror::Error;

/// Starting point of the scan, worse than any reachable `(hits, presents)`
const SENTINEL: (u8, u8) = (WORD_LENGTH as u8 + 1, WORD_LENGTH as u8 + 1);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// Candidate sets must never become empty; reaching this is a defect
    /// in word-list loading or an earlier partition
    #[error("cannot partition an empty candidate set")]
    EmptyCandidates,
}

impl Partition {
    /// Pattern of the group the adversary would pick
    ///
    /// Returns `None` only for an empty partition.
    #[must_use]
    pub fn least_helpful_pattern(&self) -> Option<FeedbackPattern> {
        let mut best = None;
        let mut best_score = SENTINEL;

        for (pattern, _) in self.iter() {
            let (hits, presents) = (pattern.hits(), pattern.presents());
            if hits < best_score.0 || (hits == best_score.0 && presents <= best_score.1) {
                best = Some(*pattern);
                best_score = (hits, presents);
            }
        }

        best
    }

    /// Consume the partition, keeping only the least helpful group
    #[must_use]
    pub fn select_least_helpful(self) -> Option<Group> {
        let pattern = self.least_helpful_pattern()?;
        self.take(&pattern)
    }
}

/// Answer `guess` adversarially against `candidates`
///
/// Returns the feedback shown to the player and the candidates that remain
/// consistent with it.
///
/// # Errors
/// Returns `PartitionError::EmptyCandidates` when `candidates` is empty.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::engine::partition_candidates;
///
/// let candidates: Vec<Word> = ["hello", "world", "quite", "fancy", "fresh", "panic", "crazy", "buggy"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let guess = Word::new("hello").unwrap();
/// let (_, survivors) = partition_candidates(&guess, &candidates).unwrap();
///
/// let survivors: Vec<&str> = survivors.iter().map(Word::text).collect();
/// assert_eq!(survivors, ["fancy", "panic", "crazy", "buggy"]);
/// ```
pub fn partition_candidates(
    guess: &Word,
    candidates: &[Word],
) -> Result<(Feedback, Vec<Word>), PartitionError> {
    group_by_pattern(guess, candidates)
        .select_least_helpful()
        .map(|group| (group.feedback, group.members))
        .ok_or(PartitionError::EmptyCandidates)
}
