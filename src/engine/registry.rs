//! Per-player session isolation
//!
//! Maps a session identifier to its own `GameSession`. Sessions never share
//! state, so no cross-session locking is needed.

use super::{GameSession, SecretGenerator};
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::debug;

/// Identifier for one player's session
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new("default")
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collection of independent sessions
///
/// Each new session gets a generator forked from the registry's, so a seeded
/// registry hands out reproducible secrets in creation order.
#[derive(Debug)]
pub struct SessionRegistry {
    generator: SecretGenerator,
    sessions: FxHashMap<SessionId, GameSession>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(generator: SecretGenerator) -> Self {
        Self {
            generator,
            sessions: FxHashMap::default(),
        }
    }

    /// Get a session, creating it on first use
    pub fn session_mut(&mut self, id: &SessionId) -> &mut GameSession {
        let generator = &mut self.generator;
        self.sessions.entry(id.clone()).or_insert_with(|| {
            debug!(session = %id, "creating session");
            GameSession::new(generator.fork())
        })
    }

    #[must_use]
    pub fn get(&self, id: &SessionId) -> Option<&GameSession> {
        self.sessions.get(id)
    }

    /// Drop a session; returns it if it existed
    pub fn remove(&mut self, id: &SessionId) -> Option<GameSession> {
        self.sessions.remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(SecretGenerator::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_are_created_lazily() {
        let mut registry = SessionRegistry::new(SecretGenerator::seeded(9));
        assert!(registry.is_empty());

        let id = SessionId::new("alice");
        registry.session_mut(&id);
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&id).is_some());
        assert!(registry.get(&SessionId::new("bob")).is_none());
    }

    #[test]
    fn sessions_do_not_share_state() {
        let mut registry = SessionRegistry::new(SecretGenerator::seeded(9));
        let alice = SessionId::new("alice");
        let bob = SessionId::new("bob");

        registry.session_mut(&alice).submit_guess("0123").unwrap();
        registry.session_mut(&alice).submit_guess("4567").unwrap();
        registry.session_mut(&bob).submit_guess("9876").unwrap();

        assert_eq!(registry.get(&alice).unwrap().attempts(), 2);
        assert_eq!(registry.get(&bob).unwrap().attempts(), 1);

        registry.session_mut(&alice).restart();
        assert_eq!(registry.get(&alice).unwrap().attempts(), 0);
        assert_eq!(registry.get(&bob).unwrap().attempts(), 1);
    }

    #[test]
    fn seeded_registries_agree() {
        let mut a = SessionRegistry::new(SecretGenerator::seeded(21));
        let mut b = SessionRegistry::new(SecretGenerator::seeded(21));

        for name in ["x", "y", "z"] {
            let id = SessionId::new(name);
            assert_eq!(a.session_mut(&id).reveal(), b.session_mut(&id).reveal());
        }
    }

    #[test]
    fn remove_forgets_session() {
        let mut registry = SessionRegistry::default();
        let id = SessionId::default();
        registry.session_mut(&id);
        assert!(registry.remove(&id).is_some());
        assert!(registry.remove(&id).is_none());
        assert!(registry.is_empty());
    }
}
