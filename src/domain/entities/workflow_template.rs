use serde::{Deserialize, Serialize};

use super::case::CaseCategory;

/// Ordered list of stages the backend copies into a case as tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowTemplate {
    pub id: String,
    pub name: String,
    pub category: CaseCategory,
    #[serde(default)]
    pub jenis_pekerjaan_id: Option<String>,
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowStep {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_in_days: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowTemplateInput {
    pub name: String,
    pub category: CaseCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jenis_pekerjaan_id: Option<String>,
    pub steps: Vec<WorkflowStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyTemplateRequest {
    pub template_id: String,
}
