use super::auth_service::AuthService;
use crate::application::ports::case_gateway::CaseGateway;
use crate::domain::derivations::{days_until_target, progress_percent};
use crate::domain::entities::{Case, Task, TaskHistoryEntry};
use crate::domain::timeline::{TimelineEvent, build_timeline};
use crate::shared::error::AppError;
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Everything the case-detail page renders, fetched in one go.
#[derive(Debug, Clone)]
pub struct CaseDetail {
    pub case: Case,
    /// Ordered by `order_index`.
    pub tasks: Vec<Task>,
    pub histories: HashMap<String, Vec<TaskHistoryEntry>>,
    pub timeline: Vec<TimelineEvent>,
    pub progress_percent: u8,
    pub days_until_target: Option<i64>,
}

pub struct CaseDetailService {
    gateway: Arc<dyn CaseGateway>,
    auth: Arc<AuthService>,
}

impl CaseDetailService {
    pub fn new(gateway: Arc<dyn CaseGateway>, auth: Arc<AuthService>) -> Self {
        Self { gateway, auth }
    }

    pub async fn load(&self, case_id: &str) -> Result<CaseDetail, AppError> {
        let case_id = case_id.trim();
        if case_id.is_empty() {
            return Err(AppError::InvalidInput("ID berkas wajib diisi".to_string()));
        }
        let token = self.auth.access_token().await?;

        let fetched = futures::try_join!(
            self.gateway.get_case(Some(&token), case_id),
            self.gateway.list_case_tasks(Some(&token), case_id),
        );
        let (case, mut tasks) = match fetched {
            Ok(pair) => pair,
            Err(err) => {
                self.auth.invalidate_on_unauthorized(&err).await;
                return Err(err);
            }
        };
        tasks.sort_by_key(|task| task.order_index);

        let histories = self.load_histories(&token, &tasks).await;
        let timeline = build_timeline(&case, &tasks, &histories);
        debug!(
            case_id = %case.id,
            tasks = tasks.len(),
            events = timeline.len(),
            "case detail assembled"
        );

        Ok(CaseDetail {
            progress_percent: progress_percent(&tasks),
            days_until_target: days_until_target(case.target_date.as_deref()),
            case,
            tasks,
            histories,
            timeline,
        })
    }

    /// Fetches every task's history concurrently. A failed fetch degrades to
    /// an empty history for that task only.
    async fn load_histories(
        &self,
        token: &str,
        tasks: &[Task],
    ) -> HashMap<String, Vec<TaskHistoryEntry>> {
        let fetches = tasks.iter().map(|task| async move {
            let result = self.gateway.list_task_history(Some(token), &task.id).await;
            (task.id.clone(), result)
        });

        let mut histories = HashMap::with_capacity(tasks.len());
        for (task_id, result) in join_all(fetches).await {
            let entries = match result {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(task_id = %task_id, error = %err, "task history unavailable");
                    self.auth.invalidate_on_unauthorized(&err).await;
                    Vec::new()
                }
            };
            histories.insert(task_id, entries);
        }
        histories
    }
}
