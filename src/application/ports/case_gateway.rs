use crate::domain::entities::{Case, Task, TaskHistoryEntry};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Reads needed to assemble the case-detail page.
#[async_trait]
pub trait CaseGateway: Send + Sync {
    async fn get_case(&self, token: Option<&str>, case_id: &str) -> Result<Case, AppError>;

    async fn list_case_tasks(
        &self,
        token: Option<&str>,
        case_id: &str,
    ) -> Result<Vec<Task>, AppError>;

    /// Change history of one task, oldest entry first.
    async fn list_task_history(
        &self,
        token: Option<&str>,
        task_id: &str,
    ) -> Result<Vec<TaskHistoryEntry>, AppError>;
}
