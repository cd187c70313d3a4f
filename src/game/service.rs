//! Game service: create, guess, fetch
//!
//! This is the request/response surface a transport talks to. Requests are
//! plain method calls; responses are serde types with the same shape the
//! JSON protocol emits.

use super::error::GameError;
use super::session::{Game, GameConfig, GameSnapshot, Variant};
use super::store::{SessionStore, lock_session};
use crate::core::{Feedback, Word};
use chrono::{Duration, Utc};
use log::{debug, error, info, warn};
use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Response to creating a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameResponse {
    pub success: bool,
    pub message: String,
    pub game_state: GameSnapshot,
}

/// Response to a submitted guess
///
/// Rejected guesses come back with `success == false` and a message rather
/// than as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Feedback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_state: Option<GameSnapshot>,
    pub game_over: bool,
    pub won: bool,
    /// Set once the game has ended with exactly one candidate left
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl GuessResponse {
    fn rejected(message: &str, game_over: bool, won: bool) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            result: None,
            game_state: None,
            game_over,
            won,
            answer: None,
        }
    }
}

/// Owns the session store and the word list new games draw from
#[derive(Debug)]
pub struct GameService {
    store: SessionStore,
    words: Vec<Word>,
    config: GameConfig,
}

impl GameService {
    #[must_use]
    pub fn new(words: Vec<Word>, config: GameConfig) -> Self {
        Self {
            store: SessionStore::new(),
            words,
            config,
        }
    }

    /// The word list new games start from
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a game over the service's word list
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if the service has no words.
    pub fn create_game(&self, variant: Variant) -> Result<NewGameResponse, GameError> {
        self.create_game_with_words(variant, &self.words)
    }

    /// Start a game over an explicit word list
    ///
    /// Absurdle games keep every word as a candidate; Wordle games pick one
    /// secret at random.
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn create_game_with_words(
        &self,
        variant: Variant,
        words: &[Word],
    ) -> Result<NewGameResponse, GameError> {
        let candidates = match variant {
            Variant::Absurdle => words.to_vec(),
            Variant::Wordle => words
                .choose(&mut rand::rng())
                .cloned()
                .into_iter()
                .collect(),
        };
        if candidates.is_empty() {
            return Err(GameError::EmptyWordList);
        }

        let id = self.store.generate_id();
        info!(
            "Created {variant} game {id} with {} candidates",
            candidates.len()
        );
        let game = Game::new(id, variant, candidates, &self.config);
        let game_state = game.snapshot();
        self.store.insert(game);

        Ok(NewGameResponse {
            success: true,
            message: "New game created successfully".to_string(),
            game_state,
        })
    }

    /// Play one guess in game `id`
    ///
    /// The word is lowercased before scoring. The whole round runs under the
    /// session's lock.
    ///
    /// # Errors
    /// - `GameError::UnknownSession` if no game has this id
    /// - `GameError::EmptyCandidateSet` if the game's candidates are gone
    pub fn submit_guess(&self, id: &str, word: &str) -> Result<GuessResponse, GameError> {
        let handle = self
            .store
            .get(id)
            .ok_or_else(|| GameError::UnknownSession(id.to_string()))?;
        let mut game = lock_session(&handle);

        if game.is_over() {
            warn!("Rejected guess for finished game {id}");
            return Ok(GuessResponse::rejected(
                "Game is already over",
                true,
                game.is_won(),
            ));
        }

        let guess = match Word::new(word) {
            Ok(guess) => guess,
            Err(e) => {
                warn!("Rejected guess {word:?} for game {id}: {e}");
                return Ok(GuessResponse::rejected(
                    "Please enter a valid 5-letter word",
                    false,
                    false,
                ));
            }
        };

        let before = game.candidates().len();
        let feedback = game
            .apply_guess(&guess)
            .inspect_err(|e| error!("Game {id}: {e}"))?;
        debug!(
            "Game {id} round {}: {guess} kept {} of {before} candidates",
            game.round(),
            game.candidates().len()
        );

        Ok(GuessResponse {
            success: true,
            message: "Guess processed successfully".to_string(),
            result: Some(feedback),
            game_state: Some(game.snapshot()),
            game_over: game.is_over(),
            won: game.is_won(),
            answer: game.answer().map(|w| w.text().to_string()),
        })
    }

    /// Forget games idle for longer than `max_idle`
    ///
    /// Returns the number of games removed.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let removed = self.store.evict_idle(Utc::now() - max_idle);
        if removed > 0 {
            info!("Evicted {removed} idle games, {} remain", self.store.len());
        }
        removed
    }

    /// Current state of game `id`
    ///
    /// # Errors
    /// Returns `GameError::UnknownSession` if no game has this id.
    pub fn get_game(&self, id: &str) -> Result<GameSnapshot, GameError> {
        let handle = self
            .store
            .get(id)
            .ok_or_else(|| GameError::UnknownSession(id.to_string()))?;
        Ok(lock_session(&handle).snapshot())
    }
}
