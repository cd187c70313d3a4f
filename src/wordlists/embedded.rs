//! Built-in word lists
//!
//! Used when no word list file is supplied.

/// Default Absurdle candidates
pub const ABSURDLE_WORDS: &[&str] = &[
    "hello", "world", "quite", "fancy", "fresh", "panic", "crazy", "buggy",
];

/// Default Wordle secrets
pub const WORDLE_WORDS: &[&str] = &[
    "crane", "slate", "fling", "grasp", "thing", "blame", "pride", "slope", "drink", "plant",
];
