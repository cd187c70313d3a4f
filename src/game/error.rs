//! Errors surfaced by the session layer

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game not found: {0}")]
    UnknownSession(String),
    /// Broken invariant: an earlier round or the word list left no candidates
    #[error("game {0} has no candidate words left")]
    EmptyCandidateSet(String),
    #[error("game {0} is already over")]
    GameOver(String),
    #[error("no words available to start a game")]
    EmptyWordList,
}
