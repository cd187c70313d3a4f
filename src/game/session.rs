//! Per-game state and the round/win policy
//!
//! A `Game` owns its candidate set and guess history. Every accepted guess
//! runs one adversarial partition; the cooperative variant simply starts with
//! a single candidate, so the same path scores it directly.

use super::error::GameError;
use crate::core::{Feedback, Word};
use crate::engine::partition_candidates;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of guesses per game
pub const DEFAULT_MAX_ROUNDS: u32 = 6;

/// Which game is being played
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Adversarial: the secret is never fixed, only the candidate set
    #[default]
    Absurdle,
    /// Cooperative: one secret chosen when the game starts
    Wordle,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absurdle => f.write_str("absurdle"),
            Self::Wordle => f.write_str("wordle"),
        }
    }
}

/// Settings shared by every game a service creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// One game session
#[derive(Debug, Clone)]
pub struct Game {
    id: String,
    variant: Variant,
    round: u32,
    max_rounds: u32,
    history: Vec<Feedback>,
    candidates: Vec<Word>,
    game_over: bool,
    won: bool,
    created_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

/// Serializable view of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub id: String,
    pub variant: Variant,
    pub round: u32,
    pub max_rounds: u32,
    pub history: Vec<Feedback>,
    /// Withheld for a running cooperative game, where it is the secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
    pub game_over: bool,
    pub won: bool,
    pub created_at: String,
    pub last_activity: String,
}

impl Game {
    /// Start a game over `candidates`
    ///
    /// Callers guarantee `candidates` is non-empty.
    #[must_use]
    pub fn new(
        id: String,
        variant: Variant,
        candidates: Vec<Word>,
        config: &GameConfig,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            variant,
            round: 0,
            max_rounds: config.max_rounds,
            history: Vec::new(),
            candidates,
            game_over: false,
            won: false,
            created_at: now,
            last_activity: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub const fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// The secret, once it can be stated unambiguously
    ///
    /// Only revealed after the game ends and exactly one candidate remains.
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        match self.candidates.as_slice() {
            [only] if self.game_over => Some(only),
            _ => None,
        }
    }

    #[must_use]
    pub const fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    /// Play one round
    ///
    /// The state is left untouched if the guess is refused or partitioning
    /// fails.
    ///
    /// # Errors
    /// - `GameError::GameOver` if the game has already ended
    /// - `GameError::EmptyCandidateSet` if the candidate set is empty, which
    ///   means an invariant was already broken
    pub fn apply_guess(&mut self, guess: &Word) -> Result<Feedback, GameError> {
        if self.game_over {
            return Err(GameError::GameOver(self.id.clone()));
        }

        let (feedback, survivors) = partition_candidates(guess, &self.candidates)
            .map_err(|_| GameError::EmptyCandidateSet(self.id.clone()))?;

        self.round += 1;
        self.candidates = survivors;
        self.history.push(feedback);
        self.game_over = self.round >= self.max_rounds;

        if let [only] = self.candidates.as_slice()
            && only == guess
        {
            self.won = true;
            self.game_over = true;
        }

        self.last_activity = Utc::now();
        Ok(feedback)
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let candidates = match self.variant {
            Variant::Wordle if !self.game_over => None,
            _ => Some(self.candidates.iter().map(|w| w.text().to_string()).collect()),
        };

        GameSnapshot {
            id: self.id.clone(),
            variant: self.variant,
            round: self.round,
            max_rounds: self.max_rounds,
            history: self.history.clone(),
            candidates,
            game_over: self.game_over,
            won: self.won,
            created_at: self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            last_activity: self.last_activity.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Score, is_solved};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn game(variant: Variant, list: &[&str]) -> Game {
        Game::new("game_1".to_string(), variant, words(list), &GameConfig::default())
    }

    fn guess(game: &mut Game, word: &str) -> Feedback {
        game.apply_guess(&Word::new(word).unwrap()).unwrap()
    }

    #[test]
    fn new_game_starts_at_round_zero() {
        let game = game(Variant::Absurdle, &["hello", "world"]);
        assert_eq!(game.round(), 0);
        assert_eq!(game.max_rounds(), DEFAULT_MAX_ROUNDS);
        assert!(game.history().is_empty());
        assert!(!game.is_over());
        assert!(game.answer().is_none());
    }

    #[test]
    fn guess_updates_round_history_and_candidates() {
        let mut game = game(Variant::Absurdle, &["hello", "world", "fancy", "panic"]);
        let feedback = guess(&mut game, "hello");

        assert_eq!(game.round(), 1);
        assert_eq!(game.history(), &[feedback]);
        assert_eq!(game.candidates(), words(&["fancy", "panic"]).as_slice());
        assert!(feedback.iter().all(|r| r.score == Score::Miss));
    }

    #[test]
    fn win_requires_guessing_the_sole_candidate() {
        let mut game = game(Variant::Absurdle, &["panic"]);

        guess(&mut game, "fancy");
        assert!(!game.is_won());
        assert!(!game.is_over());
        assert_eq!(game.candidates(), words(&["panic"]).as_slice());

        let feedback = guess(&mut game, "panic");
        assert!(is_solved(&feedback));
        assert!(game.is_won());
        assert!(game.is_over());
        assert_eq!(game.answer().map(Word::text), Some("panic"));
    }

    #[test]
    fn no_win_while_several_candidates_survive() {
        // hello is a candidate, but the adversary answers with the fancy/panic group
        let mut game = game(Variant::Absurdle, &["hello", "fancy", "panic"]);
        guess(&mut game, "hello");
        assert!(!game.is_won());
        assert_eq!(game.candidates().len(), 2);
    }

    #[test]
    fn running_out_of_rounds_ends_the_game() {
        let config = GameConfig { max_rounds: 2 };
        let mut game = Game::new(
            "game_2".to_string(),
            Variant::Absurdle,
            words(&["fancy", "panic", "buggy"]),
            &config,
        );

        guess(&mut game, "zzzzz");
        assert!(!game.is_over());
        guess(&mut game, "qqqqq");
        assert!(game.is_over());
        assert!(!game.is_won());
        // Three candidates left, so the answer stays hidden
        assert!(game.answer().is_none());
    }

    #[test]
    fn finished_game_refuses_further_guesses() {
        let config = GameConfig { max_rounds: 1 };
        let mut game = Game::new(
            "game_3".to_string(),
            Variant::Absurdle,
            words(&["panic"]),
            &config,
        );

        guess(&mut game, "fancy");
        assert!(game.is_over());
        assert!(!game.is_won());

        let late = game.apply_guess(&Word::new("panic").unwrap());
        assert_eq!(late, Err(GameError::GameOver("game_3".to_string())));
        assert_eq!(game.round(), 1);
        assert_eq!(game.history().len(), 1);
        assert!(!game.is_won());
    }

    #[test]
    fn won_game_refuses_further_guesses() {
        let mut game = game(Variant::Absurdle, &["panic"]);
        guess(&mut game, "panic");
        assert!(game.is_won());

        assert!(game.apply_guess(&Word::new("fancy").unwrap()).is_err());
        assert_eq!(game.round(), 1);
        assert!(game.is_won());
    }

    #[test]
    fn cooperative_snapshot_hides_secret_until_over() {
        let mut game = game(Variant::Wordle, &["crane"]);
        assert!(game.snapshot().candidates.is_none());

        guess(&mut game, "crane");
        let snapshot = game.snapshot();
        assert!(snapshot.won);
        assert_eq!(snapshot.candidates, Some(vec!["crane".to_string()]));
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let mut game = game(Variant::Absurdle, &["hello", "world"]);
        guess(&mut game, "zzzzz");

        let json = serde_json::to_value(game.snapshot()).unwrap();
        assert_eq!(json["maxRounds"], 6);
        assert_eq!(json["gameOver"], false);
        assert_eq!(json["variant"], "absurdle");
        assert_eq!(json["history"][0][0]["score"], 0);
        assert_eq!(json["history"][0][0]["char"], u32::from('z'));
        assert_eq!(json["candidates"][1], "world");
    }
}
