use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Used when the login response carries no `expires_at`.
    pub ttl_minutes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
                user_agent: concat!("berkas-client/", env!("CARGO_PKG_VERSION")).to_string(),
            },
            session: SessionConfig {
                ttl_minutes: 12 * 60, // one office day
            },
            logging: LoggingConfig {
                filter: "berkas=debug,info".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("BERKAS_API_BASE_URL") {
            let trimmed = v.trim().trim_end_matches('/');
            if !trimmed.is_empty() {
                cfg.api.base_url = trimmed.to_string();
            }
        }
        if let Ok(v) = std::env::var("BERKAS_USER_AGENT") {
            if !v.trim().is_empty() {
                cfg.api.user_agent = v.trim().to_string();
            }
        }
        if let Ok(v) = std::env::var("BERKAS_SESSION_TTL_MINUTES") {
            if let Some(value) = parse_u64(&v) {
                cfg.session.ttl_minutes = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("BERKAS_LOG") {
            if !v.trim().is_empty() {
                cfg.logging.filter = v.trim().to_string();
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.api.base_url)
            .map_err(|err| format!("API base_url is invalid: {err}"))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(format!("API base_url scheme must be http or https, got {other}")),
        }
        if self.session.ttl_minutes == 0 {
            return Err("Session ttl_minutes must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}
