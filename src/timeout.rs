use crate::battle::session::SessionId;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Per-session inactivity deadlines.
///
/// The registry tracks a deadline when a session is created, resets it on
/// every accepted move or surrender, and drops it when the session ends.
/// A session expires after a single uninterrupted idle window; the
/// registry's ticker drains `take_expired` and discards what it returns.
#[derive(Debug)]
pub struct SessionTimeoutSupervisor {
    window: Duration,
    deadlines: Mutex<HashMap<SessionId, Instant>>,
}

impl SessionTimeoutSupervisor {
    pub fn new(window: Duration) -> Self {
        SessionTimeoutSupervisor {
            window,
            deadlines: Mutex::new(HashMap::new()),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Start (or restart) the idle window for a session.
    pub fn track(&self, id: SessionId) {
        let mut deadlines = self.deadlines.lock().unwrap();
        deadlines.insert(id, Instant::now() + self.window);
    }

    /// Activity on the session: reset its deadline. Tracking a session
    /// twice is the same thing.
    pub fn touch(&self, id: SessionId) {
        self.track(id);
    }

    /// A session ended through normal play; forget its deadline.
    pub fn untrack(&self, id: SessionId) {
        let mut deadlines = self.deadlines.lock().unwrap();
        deadlines.remove(&id);
    }

    /// Remove and return every session whose deadline has passed.
    pub fn take_expired(&self, now: Instant) -> Vec<SessionId> {
        let mut deadlines = self.deadlines.lock().unwrap();
        let expired: Vec<SessionId> = deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in &expired {
            deadlines.remove(id);
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_the_window() {
        let supervisor = SessionTimeoutSupervisor::new(Duration::from_secs(0));
        supervisor.track(SessionId(1));
        supervisor.track(SessionId(2));

        let mut expired = supervisor.take_expired(Instant::now());
        expired.sort_by_key(|id| id.0);
        assert_eq!(expired, vec![SessionId(1), SessionId(2)]);

        // Drained; a second sweep finds nothing.
        assert!(supervisor.take_expired(Instant::now()).is_empty());
    }

    #[test]
    fn activity_resets_the_deadline() {
        let supervisor = SessionTimeoutSupervisor::new(Duration::from_secs(3600));
        supervisor.track(SessionId(7));

        // Within the window nothing expires.
        assert!(supervisor.take_expired(Instant::now()).is_empty());

        supervisor.touch(SessionId(7));
        assert!(supervisor.take_expired(Instant::now()).is_empty());
    }

    #[test]
    fn untracked_sessions_never_expire() {
        let supervisor = SessionTimeoutSupervisor::new(Duration::from_secs(0));
        supervisor.track(SessionId(9));
        supervisor.untrack(SessionId(9));
        assert!(supervisor.take_expired(Instant::now()).is_empty());
    }
}
