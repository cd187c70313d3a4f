//! Game sessions
//!
//! Session state, the keyed store that serializes guesses per game, and the
//! service a transport or terminal client drives.

mod error;
mod service;
mod session;
mod store;

pub use error::GameError;
pub use service::{GameService, GuessResponse, NewGameResponse};
pub use session::{DEFAULT_MAX_ROUNDS, Game, GameConfig, GameSnapshot, Variant};
pub use store::{SessionHandle, SessionStore, lock_session};
