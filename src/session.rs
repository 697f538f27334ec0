//! Per-visitor sessions.
//!
//! DESIGN
//! ======
//! Every browser gets its own `MessageBoard`, locale, and pending notice,
//! keyed by the id in its session cookie. Sessions are created on first
//! contact and dropped by a background sweep once idle for too long.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use uuid::Uuid;

use crate::board::MessageBoard;
use crate::locale::Locale;
use crate::notice::Notice;

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

// =============================================================================
// SESSION
// =============================================================================

struct ViewState {
    locale: Locale,
    notice: Option<Notice>,
    last_seen: Instant,
}

/// One visitor's board plus the bits of page state around it.
pub struct Session {
    pub board: Mutex<MessageBoard>,
    view: Mutex<ViewState>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Mutex::new(MessageBoard::new()),
            view: Mutex::new(ViewState {
                locale: Locale::default(),
                notice: None,
                last_seen: Instant::now(),
            }),
        }
    }

    pub async fn locale(&self) -> Locale {
        self.view.lock().await.locale
    }

    pub async fn set_locale(&self, locale: Locale) {
        self.view.lock().await.locale = locale;
    }

    /// Queue a notice for the next render, replacing any unshown one.
    pub async fn push_notice(&self, notice: Notice) {
        self.view.lock().await.notice = Some(notice);
    }

    /// Take the pending notice. Each notice is handed out once.
    pub async fn take_notice(&self) -> Option<Notice> {
        self.view.lock().await.notice.take()
    }

    pub async fn touch(&self) {
        self.view.lock().await.last_seen = Instant::now();
    }

    pub async fn idle_for(&self) -> Duration {
        self.view.lock().await.last_seen.elapsed()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Live sessions keyed by cookie id. Clone is cheap; all clones share state.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Session>>>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the session for `id`, creating a fresh one when the id is
    /// missing or unknown. Returns the effective id and whether it is new.
    pub async fn resolve(&self, id: Option<Uuid>) -> (Uuid, Arc<Session>, bool) {
        if let Some(id) = id {
            if let Some(session) = self.sessions.read().await.get(&id) {
                session.touch().await;
                return (id, session.clone(), false);
            }
        }

        let id = Uuid::new_v4();
        let session = Arc::new(Session::new());
        self.sessions.write().await.insert(id, session.clone());
        debug!(%id, "session created");
        (id, session, true)
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Session>> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop sessions idle for longer than `max_idle`. Returns how many went.
    pub async fn sweep(&self, max_idle: Duration) -> usize {
        let snapshot: Vec<(Uuid, Arc<Session>)> = self
            .sessions
            .read()
            .await
            .iter()
            .map(|(id, session)| (*id, session.clone()))
            .collect();

        let mut expired = Vec::new();
        for (id, session) in snapshot {
            if session.idle_for().await > max_idle {
                expired.push(id);
            }
        }

        if expired.is_empty() {
            return 0;
        }
        let mut sessions = self.sessions.write().await;
        for id in &expired {
            sessions.remove(id);
        }
        expired.len()
    }
}

/// Spawn the idle-session sweeper. Returns a handle for shutdown.
pub fn spawn_sweeper(registry: SessionRegistry, max_idle: Duration, every: Duration) -> JoinHandle<()> {
    info!(max_idle_secs = max_idle.as_secs(), every_secs = every.as_secs(), "session sweeper configured");
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let removed = registry.sweep(max_idle).await;
            if removed > 0 {
                debug!(removed, "expired idle sessions");
            }
        }
    })
}
