use crate::domain::entities::Session;
use async_trait::async_trait;

/// Holder of the signed-in session.
///
/// Implementations check expiry on every read: `current` never returns a
/// session whose `expires_at` has passed.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn start(&self, session: Session);
    async fn current(&self) -> Option<Session>;
    async fn clear(&self);
}
