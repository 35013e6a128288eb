use super::ApiClient;
use super::api_client::api_path;
use crate::domain::entities::{WorkflowTemplate, WorkflowTemplateInput};
use crate::shared::error::AppError;
use reqwest::Method;

const FALLBACK_LIST: &str = "Gagal memuat template alur kerja";

impl ApiClient {
    pub async fn list_workflow_templates(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<WorkflowTemplate>, AppError> {
        self.get_json("/api/v1/workflow-templates", token, FALLBACK_LIST)
            .await
    }

    pub async fn get_workflow_template(
        &self,
        token: Option<&str>,
        template_id: &str,
    ) -> Result<WorkflowTemplate, AppError> {
        self.get_json(
            &api_path(&["workflow-templates", template_id])?,
            token,
            FALLBACK_LIST,
        )
        .await
    }

    pub async fn create_workflow_template(
        &self,
        token: Option<&str>,
        input: &WorkflowTemplateInput,
    ) -> Result<WorkflowTemplate, AppError> {
        self.send_json(
            Method::POST,
            "/api/v1/workflow-templates",
            token,
            input,
            "Gagal membuat template alur kerja",
        )
        .await
    }

    pub async fn update_workflow_template(
        &self,
        token: Option<&str>,
        template_id: &str,
        input: &WorkflowTemplateInput,
    ) -> Result<WorkflowTemplate, AppError> {
        self.send_json(
            Method::PUT,
            &api_path(&["workflow-templates", template_id])?,
            token,
            input,
            "Gagal memperbarui template alur kerja",
        )
        .await
    }

    pub async fn delete_workflow_template(
        &self,
        token: Option<&str>,
        template_id: &str,
    ) -> Result<(), AppError> {
        self.delete(
            &api_path(&["workflow-templates", template_id])?,
            token,
            "Gagal menghapus template alur kerja",
        )
        .await
    }
}
