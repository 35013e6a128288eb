use super::ApiClient;
use super::api_client::api_path;
use crate::domain::entities::{ScheduleEvent, ScheduleEventInput, ScheduleEventQuery};
use crate::shared::error::AppError;
use reqwest::Method;

impl ApiClient {
    pub async fn list_schedule_events(
        &self,
        token: Option<&str>,
        query: &ScheduleEventQuery,
    ) -> Result<Vec<ScheduleEvent>, AppError> {
        self.get_json_with_query("/api/v1/schedule-events", token, query, "Gagal memuat jadwal")
            .await
    }

    pub async fn create_schedule_event(
        &self,
        token: Option<&str>,
        input: &ScheduleEventInput,
    ) -> Result<ScheduleEvent, AppError> {
        self.send_json(
            Method::POST,
            "/api/v1/schedule-events",
            token,
            input,
            "Gagal membuat jadwal",
        )
        .await
    }

    pub async fn update_schedule_event(
        &self,
        token: Option<&str>,
        event_id: &str,
        input: &ScheduleEventInput,
    ) -> Result<ScheduleEvent, AppError> {
        self.send_json(
            Method::PUT,
            &api_path(&["schedule-events", event_id])?,
            token,
            input,
            "Gagal memperbarui jadwal",
        )
        .await
    }

    pub async fn delete_schedule_event(
        &self,
        token: Option<&str>,
        event_id: &str,
    ) -> Result<(), AppError> {
        self.delete(
            &api_path(&["schedule-events", event_id])?,
            token,
            "Gagal menghapus jadwal",
        )
        .await
    }
}
