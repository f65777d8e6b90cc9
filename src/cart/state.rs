//! Shopping Cart State Management
//!
//! This module manages the application state: one [`Session`] per visitor
//! plus the loaded configuration.
//!
//! Only mutating actions store a session. Reads of an unknown id see an
//! empty session without inserting it, and stored sessions are bounded by
//! an idle timeout and a maximum count.

use super::models::{CartSnapshot, Session};
use crate::config::StorefrontConfig;
use dashmap::DashMap;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// A stored session with the time of its last use
#[derive(Debug)]
pub struct StoredSession {
    pub session: Session,
    pub last_seen: Instant,
}

/// Core application state containing visitor sessions and configuration
pub struct AppState {
    /// In-memory storage for sessions, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, StoredSession>,

    pub config: StorefrontConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}

impl AppState {
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.config.sessions.idle_timeout_secs)
    }

    /// Runs `f` against the visitor's session, storing it on first use.
    pub fn with_session<R>(&self, session_id: &str, f: impl FnOnce(&mut Session) -> R) -> R {
        if !self.sessions.contains_key(session_id) {
            self.make_room();
        }

        let mut stored = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| StoredSession {
                session: Session::default(),
                last_seen: Instant::now(),
            });
        stored.last_seen = Instant::now();
        f(&mut stored.session)
    }

    /// Runs `f` against the stored session, or against a throwaway empty
    /// one when `session_id` is unknown. Never stores anything.
    pub fn with_existing_session<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut Session) -> R,
    ) -> R {
        match self.sessions.get_mut(session_id) {
            Some(mut stored) => {
                stored.last_seen = Instant::now();
                f(&mut stored.session)
            }
            None => f(&mut Session::default()),
        }
    }

    pub fn snapshot(&self, session_id: &str) -> CartSnapshot {
        self.with_existing_session(session_id, |session| {
            CartSnapshot::from_session(session_id, session)
        })
    }

    /// Drops sessions idle for longer than the configured timeout.
    /// Returns how many were removed.
    pub fn evict_idle(&self) -> usize {
        let timeout = self.idle_timeout();
        let before = self.sessions.len();
        self.sessions
            .retain(|_, stored| stored.last_seen.elapsed() < timeout);
        before.saturating_sub(self.sessions.len())
    }

    /// Keeps the map below `max_sessions` before a new session is stored.
    fn make_room(&self) {
        let max = self.config.sessions.max_sessions.max(1);
        if self.sessions.len() < max {
            return;
        }

        let evicted = self.evict_idle();
        while self.sessions.len() >= max {
            let oldest = self
                .sessions
                .iter()
                .min_by_key(|entry| entry.value().last_seen)
                .map(|entry| entry.key().clone());
            match oldest {
                Some(id) => {
                    self.sessions.remove(&id);
                }
                None => break,
            }
        }
        tracing::debug!(evicted, stored = self.sessions.len(), "session store at capacity");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_item;

    fn state_with(idle_timeout_secs: u64, max_sessions: usize) -> AppState {
        let mut config = StorefrontConfig::default();
        config.sessions.idle_timeout_secs = idle_timeout_secs;
        config.sessions.max_sessions = max_sessions;
        AppState::new(config)
    }

    #[test]
    fn sessions_are_isolated() {
        let state = AppState::default();
        state.with_session("a", |s| s.add(find_item("1").unwrap()));
        state.with_session("b", |s| s.add(find_item("2").unwrap()));
        state.with_session("b", |s| s.add(find_item("3").unwrap()));

        assert_eq!(state.snapshot("a").badge, 1);
        assert_eq!(state.snapshot("b").badge, 2);
        assert_eq!(state.snapshot("c").badge, 0);
    }

    #[test]
    fn reads_do_not_store_sessions() {
        let state = AppState::default();
        for i in 0..50 {
            let id = format!("unknown-{}", i);
            assert_eq!(state.snapshot(&id).badge, 0);
            state.with_existing_session(&id, |s| s.take_effect());
        }
        assert_eq!(state.sessions.len(), 0);
    }

    #[test]
    fn changes_to_unknown_sessions_are_discarded() {
        let state = AppState::default();
        state.with_existing_session("ghost", |s| s.add(find_item("1").unwrap()));
        assert_eq!(state.snapshot("ghost").badge, 0);
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn store_never_exceeds_capacity() {
        let state = state_with(3600, 3);
        for i in 0..10 {
            state.with_session(&format!("s{}", i), |s| s.open_cart());
        }
        assert_eq!(state.sessions.len(), 3);
        assert!(state.sessions.contains_key("s9"));
    }

    #[test]
    fn idle_sessions_are_evicted() {
        let state = state_with(0, 100);
        state.with_session("a", |s| s.open_cart());
        state.with_session("b", |s| s.open_cart());

        assert_eq!(state.evict_idle(), 2);
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn active_sessions_survive_sweep() {
        let state = AppState::default();
        state.with_session("a", |s| s.add(find_item("4").unwrap()));

        assert_eq!(state.evict_idle(), 0);
        assert_eq!(state.snapshot("a").badge, 1);
    }
}
