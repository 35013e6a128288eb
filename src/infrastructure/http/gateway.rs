use super::ApiClient;
use crate::application::ports::auth_gateway::AuthGateway;
use crate::application::ports::case_gateway::CaseGateway;
use crate::domain::entities::{Case, LoginRequest, LoginResponse, Task, TaskHistoryEntry};
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
impl CaseGateway for ApiClient {
    async fn get_case(&self, token: Option<&str>, case_id: &str) -> Result<Case, AppError> {
        ApiClient::get_case(self, token, case_id).await
    }

    async fn list_case_tasks(
        &self,
        token: Option<&str>,
        case_id: &str,
    ) -> Result<Vec<Task>, AppError> {
        ApiClient::list_case_tasks(self, token, case_id).await
    }

    async fn list_task_history(
        &self,
        token: Option<&str>,
        task_id: &str,
    ) -> Result<Vec<TaskHistoryEntry>, AppError> {
        ApiClient::list_task_history(self, token, task_id).await
    }
}

#[async_trait]
impl AuthGateway for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        ApiClient::login(self, request).await
    }
}
