//! Short-lived selection sessions for the date → name picker.
//!
//! A session holds the rows found for one date so a later dropdown choice
//! can be resolved by index. Sessions expire after a period of inactivity;
//! each successful pick refreshes the deadline. Expired sessions are dropped
//! lazily whenever the store is touched, there is no background sweeper.

use crate::core::archive::EntryDetail;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Candidates offered to the user for one date.
#[derive(Debug, Clone)]
pub struct SelectionSession {
    /// Date the candidates were loaded for
    pub date: String,
    /// Candidate rows, in the order shown in the dropdown
    pub entries: Vec<EntryDetail>,
    /// Deadline after which the session is gone
    pub expires_at: Instant,
}

/// Result of resolving a dropdown choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The chosen entry
    Found {
        /// Date of the session
        date: String,
        /// Chosen entry
        entry: EntryDetail,
    },
    /// Unknown or timed-out session
    Expired,
    /// Index does not point at a candidate
    OutOfRange,
}

/// In-memory map of open selection sessions keyed by session id.
#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    sessions: DashMap<u64, SelectionSession>,
}

impl SessionStore {
    /// Creates a store whose sessions live for `ttl` of inactivity.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: DashMap::new(),
        }
    }

    /// Opens a session for `date` with the given candidates.
    pub fn open(&self, id: u64, date: &str, entries: Vec<EntryDetail>) {
        self.open_at(id, date, entries, Instant::now());
    }

    /// Resolves the `index`-th candidate of session `id`.
    pub fn select(&self, id: u64, index: usize) -> Selection {
        self.select_at(id, index, Instant::now())
    }

    /// Number of sessions that have not expired yet.
    pub fn active_count(&self) -> usize {
        self.prune(Instant::now());
        self.sessions.len()
    }

    fn prune(&self, now: Instant) {
        self.sessions.retain(|_, s| s.expires_at > now);
    }

    fn open_at(&self, id: u64, date: &str, entries: Vec<EntryDetail>, now: Instant) {
        self.prune(now);
        self.sessions.insert(
            id,
            SelectionSession {
                date: date.to_string(),
                entries,
                expires_at: now + self.ttl,
            },
        );
    }

    fn select_at(&self, id: u64, index: usize, now: Instant) -> Selection {
        // No shard guard may be held across the prune
        self.prune(now);

        let Some(mut session) = self.sessions.get_mut(&id) else {
            return Selection::Expired;
        };
        let Some(entry) = session.entries.get(index).cloned() else {
            return Selection::OutOfRange;
        };

        session.expires_at = now + self.ttl;
        Selection::Found {
            date: session.date.clone(),
            entry,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic)]
    use super::*;

    fn entries() -> Vec<EntryDetail> {
        vec![
            EntryDetail {
                name: "Alice".to_string(),
                message: "Patrol log".to_string(),
            },
            EntryDetail {
                name: "Bob".to_string(),
                message: "Shift notes".to_string(),
            },
        ]
    }

    #[test]
    fn test_select_by_index() {
        let store = SessionStore::new(Duration::from_secs(60));
        store.open(7, "2025-01-01", entries());

        assert_eq!(
            store.select(7, 1),
            Selection::Found {
                date: "2025-01-01".to_string(),
                entry: entries()[1].clone(),
            }
        );
    }

    #[test]
    fn test_session_allows_repeated_picks() {
        let store = SessionStore::new(Duration::from_secs(60));
        store.open(7, "2025-01-01", entries());

        assert!(matches!(store.select(7, 0), Selection::Found { .. }));
        assert!(matches!(store.select(7, 1), Selection::Found { .. }));
    }

    #[test]
    fn test_unknown_session_is_expired() {
        let store = SessionStore::new(Duration::from_secs(60));
        assert_eq!(store.select(99, 0), Selection::Expired);
    }

    #[test]
    fn test_index_out_of_range() {
        let store = SessionStore::new(Duration::from_secs(60));
        store.open(7, "2025-01-01", entries());
        assert_eq!(store.select(7, 2), Selection::OutOfRange);
    }

    #[test]
    fn test_session_expires_after_idle_timeout() {
        let store = SessionStore::new(Duration::from_secs(60));
        let start = Instant::now();
        store.open_at(7, "2025-01-01", entries(), start);

        let just_before = start + Duration::from_secs(59);
        assert!(matches!(store.select_at(7, 0, just_before), Selection::Found { .. }));

        // The pick above pushed the deadline to just_before + 60s
        let after_refresh = just_before + Duration::from_secs(30);
        assert!(matches!(store.select_at(7, 0, after_refresh), Selection::Found { .. }));

        let idle = after_refresh + Duration::from_secs(60);
        assert_eq!(store.select_at(7, 0, idle), Selection::Expired);
    }

    #[test]
    fn test_expired_sessions_are_pruned() {
        let store = SessionStore::new(Duration::ZERO);
        store.open(1, "2025-01-01", entries());
        store.open(2, "2025-01-02", entries());
        assert_eq!(store.active_count(), 0);
    }

    #[test]
    fn test_concurrent_sessions_stay_separate() {
        let store = SessionStore::new(Duration::from_secs(60));

        std::thread::scope(|scope| {
            for id in 0..8u64 {
                let store = &store;
                scope.spawn(move || {
                    store.open(id, &format!("2025-01-0{id}"), entries());
                    assert!(matches!(store.select(id, 0), Selection::Found { .. }));
                });
            }
        });

        assert_eq!(store.active_count(), 8);
        match store.select(3, 1) {
            Selection::Found { date, entry } => {
                assert_eq!(date, "2025-01-03");
                assert_eq!(entry.name, "Bob");
            }
            other => panic!("unexpected selection {other:?}"),
        }
    }
}
