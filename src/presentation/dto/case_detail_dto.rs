use super::Validate;
use crate::application::services::CaseDetail;
use crate::domain::derivations::is_overdue_on;
use crate::domain::entities::{Case, Task, TaskStatus};
use crate::domain::timeline::TimelineEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CaseDetailRequest {
    pub case_id: String,
}

impl Validate for CaseDetailRequest {
    fn validate(&self) -> Result<(), String> {
        if self.case_id.trim().is_empty() {
            return Err("ID berkas wajib diisi".to_string());
        }
        Ok(())
    }
}

/// One row of the tahapan table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub order_index: i32,
    pub due_date: Option<String>,
    pub assignee_id: Option<String>,
    pub is_overdue: bool,
    pub history_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseDetailResponse {
    pub case: Case,
    pub progress_percent: u8,
    pub days_until_target: Option<i64>,
    pub tasks: Vec<TaskRow>,
    pub timeline: Vec<TimelineEvent>,
}

impl CaseDetailResponse {
    /// `today` is the viewer's local date as `YYYY-MM-DD`.
    pub fn from_detail(detail: CaseDetail, today: &str) -> Self {
        let tasks = detail
            .tasks
            .iter()
            .map(|task| TaskRow::from_task(task, today, &detail))
            .collect();

        Self {
            case: detail.case,
            progress_percent: detail.progress_percent,
            days_until_target: detail.days_until_target,
            tasks,
            timeline: detail.timeline,
        }
    }
}

impl TaskRow {
    fn from_task(task: &Task, today: &str, detail: &CaseDetail) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status.clone(),
            order_index: task.order_index,
            due_date: task.due_date.clone(),
            assignee_id: task.assignee_id.clone(),
            is_overdue: is_overdue_on(task, today),
            history_count: detail.histories.get(&task.id).map_or(0, Vec::len),
        }
    }
}
