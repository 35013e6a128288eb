use std::sync::Arc;

use chrono::Duration;

use crate::application::services::{AuthService, CaseDetailService};
use crate::infrastructure::{ApiClient, MemorySessionStore};
use crate::presentation::handlers::{AuthHandler, CaseDetailHandler, ScheduleHandler};
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;

const MAX_SESSION_TTL_MINUTES: u64 = 366 * 24 * 60;

/// Wired services and handlers. One instance per process; the session lives
/// only as long as it does.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub api: Arc<ApiClient>,
    pub auth_service: Arc<AuthService>,
    pub case_detail_service: Arc<CaseDetailService>,
    pub auth_handler: Arc<AuthHandler>,
    pub case_detail_handler: Arc<CaseDetailHandler>,
    pub schedule_handler: Arc<ScheduleHandler>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        config.validate().map_err(AppError::ConfigurationError)?;
        let api = Arc::new(ApiClient::new(&config.api)?);
        Ok(Self::with_api(config, api))
    }

    /// Wires services around an already-built client (tests point it at a
    /// local mock server).
    pub fn with_api(config: AppConfig, api: Arc<ApiClient>) -> Self {
        let session_store = Arc::new(MemorySessionStore::new());
        let ttl_minutes = config.session.ttl_minutes.min(MAX_SESSION_TTL_MINUTES) as i64;

        let auth_service = Arc::new(AuthService::new(
            api.clone(),
            session_store,
            Duration::minutes(ttl_minutes),
        ));
        let case_detail_service = Arc::new(CaseDetailService::new(
            api.clone(),
            auth_service.clone(),
        ));

        let auth_handler = Arc::new(AuthHandler::new(auth_service.clone()));
        let case_detail_handler = Arc::new(CaseDetailHandler::new(case_detail_service.clone()));
        let schedule_handler = Arc::new(ScheduleHandler::new(api.clone(), auth_service.clone()));

        Self {
            config: Arc::new(config),
            api,
            auth_service,
            case_detail_service,
            auth_handler,
            case_detail_handler,
            schedule_handler,
        }
    }
}
