//! Word list loading utilities
//!
//! Files may be newline-delimited or comma-separated; every field is trimmed
//! and lowercased, anything that is not a valid 5-letter word is skipped, and
//! duplicates are dropped keeping the first occurrence.

use crate::core::Word;
use log::info;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no valid 5-letter words found in the word list")]
    Empty,
}

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Empty`
/// if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use absurdle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.csv").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = load_from_str(&content)?;
    info!("Loaded {} unique 5-letter words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a word list held in memory
///
/// # Errors
///
/// Returns `LoadError::Empty` if no valid words remain.
pub fn load_from_str(content: &str) -> Result<Vec<Word>, LoadError> {
    let mut seen = FxHashSet::default();

    let words: Vec<Word> = content
        .lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .filter_map(|field| Word::new(field).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect();

    if words.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use absurdle::wordlists::loader::words_from_slice;
/// use absurdle::wordlists::ABSURDLE_WORDS;
///
/// let words = words_from_slice(ABSURDLE_WORDS);
/// assert_eq!(words.len(), ABSURDLE_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
