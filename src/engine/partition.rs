//! Grouping candidates by the feedback a guess would produce
//!
//! Given a guess and the set of still-possible secrets, every candidate is
//! scored and candidates with identical feedback patterns are grouped. The
//! groups form a true partition of the input: disjoint, and together holding
//! every candidate exactly once.

use crate::core::{Feedback, FeedbackPattern, Word, score_guess};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Candidates that all produce the same feedback for a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Feedback shared by every member
    pub feedback: Feedback,
    /// Members, in input order
    pub members: Vec<Word>,
}

/// All feedback groups for one guess, keyed and ordered by pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    groups: BTreeMap<FeedbackPattern, Group>,
}

impl Partition {
    /// Number of distinct feedback patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in ascending pattern order
    pub fn iter(&self) -> impl Iterator<Item = (&FeedbackPattern, &Group)> {
        self.groups.iter()
    }

    /// Take ownership of the group for `pattern`
    pub(crate) fn take(mut self, pattern: &FeedbackPattern) -> Option<Group> {
        self.groups.remove(pattern)
    }

    /// Total number of candidates across all groups
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.groups.values().map(|group| group.members.len()).sum()
    }
}

/// Group `candidates` by the pattern they produce with `guess`
///
/// Scoring runs in parallel; grouping happens over the collected results in
/// input order, so the partition is identical on every run.
///
/// # Examples
/// ```
/// use absurdle::core::Word;
/// use absurdle::engine::group_by_pattern;
///
/// let guess = Word::new("hello").unwrap();
/// let candidates: Vec<Word> = ["hello", "world", "fancy", "panic"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let partition = group_by_pattern(&guess, &candidates);
/// assert_eq!(partition.len(), 3); // hello | world | fancy + panic
/// assert_eq!(partition.candidate_count(), 4);
/// ```
#[must_use]
pub fn group_by_pattern(guess: &Word, candidates: &[Word]) -> Partition {
    let scored: Vec<(FeedbackPattern, Feedback)> = candidates
        .par_iter()
        .map(|candidate| {
            let feedback = score_guess(candidate, guess);
            (FeedbackPattern::from_feedback(&feedback), feedback)
        })
        .collect();

    let mut groups: BTreeMap<FeedbackPattern, Group> = BTreeMap::new();
    for ((pattern, feedback), candidate) in scored.into_iter().zip(candidates) {
        groups
            .entry(pattern)
            .or_insert_with(|| Group {
                feedback,
                members: Vec::new(),
            })
            .members
            .push(candidate.clone());
    }

    Partition { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    const EIGHT: &[&str] = &[
        "hello", "world", "quite", "fancy", "fresh", "panic", "crazy", "buggy",
    ];

    #[test]
    fn groups_form_a_true_partition() {
        let candidates = words(EIGHT);
        for guess in &candidates {
            let partition = group_by_pattern(guess, &candidates);

            let mut seen = HashSet::new();
            for (_, group) in partition.iter() {
                for member in &group.members {
                    assert!(seen.insert(member.clone()), "{member} appears twice");
                }
            }
            let input: HashSet<Word> = candidates.iter().cloned().collect();
            assert_eq!(seen, input);
            assert_eq!(partition.candidate_count(), candidates.len());
        }
    }

    #[test]
    fn every_member_reproduces_group_feedback() {
        let candidates = words(EIGHT);
        let guess = Word::new("crazy").unwrap();
        let partition = group_by_pattern(&guess, &candidates);

        for (pattern, group) in partition.iter() {
            for member in &group.members {
                let feedback = score_guess(member, &guess);
                assert_eq!(feedback, group.feedback);
                assert_eq!(&FeedbackPattern::from_feedback(&feedback), pattern);
            }
        }
    }

    #[test]
    fn members_keep_input_order() {
        let candidates = words(EIGHT);
        let guess = Word::new("hello").unwrap();
        let partition = group_by_pattern(&guess, &candidates);

        let largest = partition
            .iter()
            .map(|(_, group)| group)
            .max_by_key(|group| group.members.len())
            .unwrap();
        assert_eq!(largest.members, words(&["fancy", "panic", "crazy", "buggy"]));
    }

    #[test]
    fn guess_outside_candidates_is_scored_normally() {
        let candidates = words(&["fancy", "panic"]);
        let guess = Word::new("zzzzz").unwrap();
        let partition = group_by_pattern(&guess, &candidates);
        assert_eq!(partition.len(), 1);
        assert_eq!(partition.candidate_count(), 2);
    }

    #[test]
    fn empty_candidates_give_empty_partition() {
        let guess = Word::new("hello").unwrap();
        let partition = group_by_pattern(&guess, &[]);
        assert!(partition.is_empty());
    }

    #[test]
    fn grouping_is_deterministic() {
        let candidates = words(EIGHT);
        let guess = Word::new("fresh").unwrap();
        assert_eq!(
            group_by_pattern(&guess, &candidates),
            group_by_pattern(&guess, &candidates)
        );
    }
}
