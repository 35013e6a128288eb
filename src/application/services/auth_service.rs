use crate::application::ports::auth_gateway::AuthGateway;
use crate::application::ports::session_store::SessionStore;
use crate::domain::entities::{LoginRequest, Session};
use crate::shared::error::AppError;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};

const SESSION_EXPIRED_MESSAGE: &str = "Sesi telah berakhir, silakan login kembali";

#[derive(Debug, Clone)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    /// The live session, if any; expired sessions never show up here.
    pub session: Option<Session>,
}

pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    session_store: Arc<dyn SessionStore>,
    default_ttl: Duration,
}

impl AuthService {
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        session_store: Arc<dyn SessionStore>,
        default_ttl: Duration,
    ) -> Self {
        Self {
            gateway,
            session_store,
            default_ttl,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(
                "Email dan kata sandi wajib diisi".to_string(),
            ));
        }

        let response = self
            .gateway
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        let expires_at = response
            .expires_at
            .unwrap_or_else(|| Utc::now() + self.default_ttl);
        let session = Session::new(response.token, response.user, expires_at);
        self.session_store.start(session.clone()).await;
        info!(user_id = %session.user.id, %expires_at, "signed in");
        Ok(session)
    }

    pub async fn logout(&self) {
        self.session_store.clear().await;
        info!("signed out");
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.session_store.current().await
    }

    pub async fn status(&self) -> AuthStatus {
        let session = self.current_session().await;
        AuthStatus {
            is_authenticated: session.is_some(),
            session,
        }
    }

    /// Bearer token of the live session.
    pub async fn access_token(&self) -> Result<String, AppError> {
        self.current_session()
            .await
            .map(|session| session.token)
            .ok_or_else(|| AppError::Unauthorized(SESSION_EXPIRED_MESSAGE.to_string()))
    }

    /// Drops the session when the backend rejected its token.
    pub async fn invalidate_on_unauthorized(&self, err: &AppError) {
        if err.is_unauthorized() {
            warn!(error = %err, "token rejected, clearing session");
            self.session_store.clear().await;
        }
    }
}
