//! Keyed in-memory session storage
//!
//! Sessions live in a sharded `DashMap`, so lookups and inserts for different
//! games rarely contend. Each session carries its own `Mutex`, and a guess
//! holds only that lock for its read-partition-write sequence; map shard
//! guards are never held across a guess.

use super::session::Game;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to one session
pub type SessionHandle = Arc<Mutex<Game>>;

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, SessionHandle, FxBuildHasher>,
    next_seq: AtomicU64,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id that has not been handed out by this store
    #[must_use]
    pub fn generate_id(&self) -> String {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        format!("game_{nanos}_{seq}")
    }

    /// Store a game under its own id, returning its handle
    pub fn insert(&self, game: Game) -> SessionHandle {
        let id = game.id().to_string();
        let handle = Arc::new(Mutex::new(game));
        self.sessions.insert(id, Arc::clone(&handle));
        handle
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.get(id).map(|entry| Arc::clone(entry.value()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop sessions whose last activity is older than `cutoff`
    ///
    /// A session that is locked mid-guess counts as active and is kept.
    /// Returns the number of sessions removed.
    pub fn evict_idle(&self, cutoff: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, handle| match handle.try_lock() {
            Ok(game) => game.last_activity() >= cutoff,
            Err(_) => true,
        });
        before.saturating_sub(self.sessions.len())
    }
}

/// Lock a session, recovering the state if a previous holder panicked
///
/// `Game::apply_guess` only mutates after the partition succeeded, so a
/// poisoned session still holds a consistent round.
pub fn lock_session(handle: &SessionHandle) -> MutexGuard<'_, Game> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}
