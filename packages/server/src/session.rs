use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::debug;

/// Length of the opaque session token placed in the cookie.
const TOKEN_LEN: usize = 48;

/// Server-side record behind a session cookie.
#[derive(Debug, Clone)]
pub struct Session {
    pub account_id: i32,
    pub expires_at: DateTime<Utc>,
}

/// Volatile session table: opaque token -> session record.
///
/// Entries expire after the configured TTL. Expired entries are dropped
/// lazily on access and swept periodically by [`spawn_pruner`]. Losing the
/// store on restart invalidates every session, forcing re-login.
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Create a session for an account and return the opaque token.
    pub fn create(&self, account_id: i32) -> String {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();

        self.sessions.insert(
            token.clone(),
            Session {
                account_id,
                expires_at: Utc::now() + self.ttl,
            },
        );
        token
    }

    /// Look up a session by token. An expired session is removed and
    /// reported as absent.
    pub fn get(&self, token: &str) -> Option<Session> {
        let session = self.sessions.get(token)?.clone();
        if session.expires_at <= Utc::now() {
            drop(self.sessions.remove(token));
            return None;
        }
        Some(session)
    }

    /// Invalidate a session. Unknown tokens are a no-op, so logout stays
    /// idempotent.
    pub fn remove(&self, token: &str) {
        self.sessions.remove(token);
    }

    /// Drop every expired entry. Returns the number removed.
    pub fn prune_expired(&self) -> usize {
        let before = self.sessions.len();
        let now = Utc::now();
        self.sessions.retain(|_, session| session.expires_at > now);
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Periodically sweep expired sessions.
pub fn spawn_pruner(sessions: Arc<SessionStore>, every: StdDuration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.tick().await; // first tick fires immediately
        loop {
            interval.tick().await;
            let removed = sessions.prune_expired();
            if removed > 0 {
                debug!("Pruned {} expired sessions", removed);
            }
        }
    });
}
