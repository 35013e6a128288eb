use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// Authenticated session held in memory for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, user: User, expires_at: DateTime<Utc>) -> Self {
        Self {
            token,
            user,
            expires_at,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
