use super::ApiClient;
use super::api_client::api_path;
use crate::domain::entities::{
    ApplyTemplateRequest, Task, TaskHistoryEntry, TaskInput, TaskUpdate,
};
use crate::shared::error::AppError;
use reqwest::Method;

impl ApiClient {
    pub async fn list_case_tasks(
        &self,
        token: Option<&str>,
        case_id: &str,
    ) -> Result<Vec<Task>, AppError> {
        self.get_json(
            &api_path(&["cases", case_id, "tasks"])?,
            token,
            "Gagal memuat tahapan",
        )
        .await
    }

    pub async fn create_task(
        &self,
        token: Option<&str>,
        case_id: &str,
        input: &TaskInput,
    ) -> Result<Task, AppError> {
        self.send_json(
            Method::POST,
            &api_path(&["cases", case_id, "tasks"])?,
            token,
            input,
            "Gagal membuat tahapan",
        )
        .await
    }

    pub async fn update_task(
        &self,
        token: Option<&str>,
        task_id: &str,
        update: &TaskUpdate,
    ) -> Result<Task, AppError> {
        self.send_json(
            Method::PUT,
            &api_path(&["tasks", task_id])?,
            token,
            update,
            "Gagal memperbarui tahapan",
        )
        .await
    }

    pub async fn delete_task(&self, token: Option<&str>, task_id: &str) -> Result<(), AppError> {
        self.delete(&api_path(&["tasks", task_id])?, token, "Gagal menghapus tahapan")
            .await
    }

    pub async fn list_task_history(
        &self,
        token: Option<&str>,
        task_id: &str,
    ) -> Result<Vec<TaskHistoryEntry>, AppError> {
        self.get_json(
            &api_path(&["tasks", task_id, "history"])?,
            token,
            "Gagal memuat riwayat tahapan",
        )
        .await
    }

    /// Asks the backend to copy a workflow template into the case as tasks.
    pub async fn apply_workflow_template(
        &self,
        token: Option<&str>,
        case_id: &str,
        template_id: &str,
    ) -> Result<Vec<Task>, AppError> {
        let body = ApplyTemplateRequest {
            template_id: template_id.to_string(),
        };
        self.send_json(
            Method::POST,
            &api_path(&["cases", case_id, "apply-template"])?,
            token,
            &body,
            "Gagal menerapkan template",
        )
        .await
    }
}
