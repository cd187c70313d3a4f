//! Absurdle
//!
//! An adversarial Wordle: the secret is never fixed. Every guess splits the
//! remaining candidate words by the feedback they would produce, and the game
//! answers with the least helpful group. The classic cooperative game is
//! available too, running through the same partition with a single secret.
//!
//! # Quick Start
//!
//! ```rust
//! use absurdle::game::{GameConfig, GameService, Variant};
//! use absurdle::wordlists;
//!
//! let service = GameService::new(wordlists::builtin(Variant::Absurdle), GameConfig::default());
//! let game = service.create_game(Variant::Absurdle).unwrap();
//!
//! let response = service.submit_guess(&game.game_state.id, "hello").unwrap();
//! assert!(response.success);
//! assert_eq!(
//!     response.game_state.unwrap().candidates.unwrap(),
//!     ["fancy", "panic", "crazy", "buggy"]
//! );
//! ```

// Core domain types
pub mod core;

// Adversarial partitioning
pub mod engine;

// Sessions and the game service
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
