//! Case activity timeline shown on the case-detail page.
//!
//! The timeline is never stored; it is rebuilt from the case, its tasks and
//! each task's change history every time the page is loaded.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::{Case, HISTORY_FIELD_CREATED, Task, TaskHistoryEntry};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventType {
    CaseCreated,
    TaskCreated,
    TaskUpdated,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEvent {
    pub id: String,
    pub at: DateTime<Utc>,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: TimelineEventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

/// Merges case and task timestamps into one ascending sequence.
///
/// Tasks without an entry in `histories` are treated as having no history,
/// so their events carry no actor. Events with equal timestamps keep their
/// emission order (case first, then tasks in input order).
pub fn build_timeline(
    case: &Case,
    tasks: &[Task],
    histories: &HashMap<String, Vec<TaskHistoryEntry>>,
) -> Vec<TimelineEvent> {
    let mut events = Vec::with_capacity(1 + tasks.len() * 2);

    events.push(TimelineEvent {
        id: format!("case-{}", case.id),
        at: case.created_at,
        label: "Berkas dibuat".to_string(),
        kind: TimelineEventType::CaseCreated,
        actor: case.created_by.clone(),
    });

    for task in tasks {
        let history = histories
            .get(&task.id)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let created_by = history
            .iter()
            .find(|entry| entry.field == HISTORY_FIELD_CREATED)
            .and_then(|entry| entry.changed_by.clone());
        events.push(TimelineEvent {
            id: format!("task-{}-created", task.id),
            at: task.created_at,
            label: format!("Tahapan \"{}\" dibuat", task.title),
            kind: TimelineEventType::TaskCreated,
            actor: created_by,
        });

        if task.updated_at != task.created_at {
            let updated_by = history.last().and_then(|entry| entry.changed_by.clone());
            events.push(TimelineEvent {
                id: format!("task-{}-updated", task.id),
                at: task.updated_at,
                label: format!("Tahapan \"{}\" diperbarui", task.title),
                kind: TimelineEventType::TaskUpdated,
                actor: updated_by,
            });
        }
    }

    events.sort_by_key(|event| event.at);
    events
}
