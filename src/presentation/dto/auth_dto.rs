use super::Validate;
use crate::domain::entities::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Email dan kata sandi wajib diisi".to_string());
        }
        if !self.email.contains('@') {
            return Err("Format email tidak valid".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub office_id: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            user_id: session.user.id,
            name: session.user.name,
            email: session.user.email,
            role: session.user.role,
            office_id: session.user.office_id,
            expires_at: session.expires_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthStatusResponse {
    pub is_authenticated: bool,
    pub current_user: Option<SessionResponse>,
}
