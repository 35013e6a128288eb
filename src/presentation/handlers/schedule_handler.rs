use crate::{
    application::services::AuthService,
    domain::derivations::current_utc_offset,
    domain::entities::{ScheduleEvent, ScheduleEventInput, ScheduleEventQuery},
    infrastructure::http::ApiClient,
    presentation::dto::{Validate, schedule_dto::ScheduleEventForm},
    shared::error::AppError,
};
use chrono::FixedOffset;
use std::sync::Arc;

/// Schedule (jadwal) calls. Form times are turned into RFC3339 with the
/// viewer's current UTC offset before they reach the backend.
pub struct ScheduleHandler {
    api: Arc<ApiClient>,
    auth_service: Arc<AuthService>,
    offset: Option<FixedOffset>,
}

impl ScheduleHandler {
    pub fn new(api: Arc<ApiClient>, auth_service: Arc<AuthService>) -> Self {
        Self {
            api,
            auth_service,
            offset: None,
        }
    }

    /// Pins the offset instead of reading the local zone on every call.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    pub async fn list_events(
        &self,
        query: ScheduleEventQuery,
    ) -> Result<Vec<ScheduleEvent>, AppError> {
        let token = self.auth_service.access_token().await?;
        let result = self.api.list_schedule_events(Some(&token), &query).await;
        self.finish(result).await
    }

    pub async fn create_event(&self, form: ScheduleEventForm) -> Result<ScheduleEvent, AppError> {
        let input = self.build_input(&form)?;
        let token = self.auth_service.access_token().await?;
        let result = self.api.create_schedule_event(Some(&token), &input).await;
        self.finish(result).await
    }

    pub async fn update_event(
        &self,
        event_id: &str,
        form: ScheduleEventForm,
    ) -> Result<ScheduleEvent, AppError> {
        let input = self.build_input(&form)?;
        let token = self.auth_service.access_token().await?;
        let result = self
            .api
            .update_schedule_event(Some(&token), event_id, &input)
            .await;
        self.finish(result).await
    }

    pub async fn delete_event(&self, event_id: &str) -> Result<(), AppError> {
        let token = self.auth_service.access_token().await?;
        let result = self.api.delete_schedule_event(Some(&token), event_id).await;
        self.finish(result).await
    }

    fn build_input(&self, form: &ScheduleEventForm) -> Result<ScheduleEventInput, AppError> {
        form.validate().map_err(AppError::InvalidInput)?;
        let offset = self.offset.unwrap_or_else(current_utc_offset);
        let input = form
            .to_input(offset)
            .map_err(|err| AppError::InvalidInput(err.to_string()))?;
        // Same date and offset, so the strings order like the instants.
        if input.end_at < input.start_at {
            return Err(AppError::InvalidInput(
                "Jam selesai harus setelah jam mulai".to_string(),
            ));
        }
        Ok(input)
    }

    async fn finish<T>(&self, result: Result<T, AppError>) -> Result<T, AppError> {
        if let Err(err) = &result {
            self.auth_service.invalidate_on_unauthorized(err).await;
        }
        result
    }
}
