use crate::application::ports::session_store::SessionStore;
use crate::domain::entities::Session;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-wide session cache. Nothing is written to disk; a restart means a
/// new login.
#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn start(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    async fn current(&self) -> Option<Session> {
        let now = Utc::now();
        {
            let guard = self.session.read().await;
            match guard.as_ref() {
                None => return None,
                Some(session) if !session.is_expired_at(now) => return Some(session.clone()),
                Some(_) => {}
            }
        }

        let mut guard = self.session.write().await;
        if guard
            .as_ref()
            .is_some_and(|session| session.is_expired_at(now))
        {
            debug!("dropping expired session");
            *guard = None;
        }
        guard.clone()
    }

    async fn clear(&self) {
        *self.session.write().await = None;
    }
}
