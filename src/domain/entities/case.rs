use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Licence type a berkas is filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CaseCategory {
    Notaris,
    Ppat,
    #[serde(other)]
    Other,
}

impl CaseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseCategory::Notaris => "notaris",
            CaseCategory::Ppat => "ppat",
            CaseCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Draft,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Other,
}

/// A berkas (deed file) as returned by `/api/v1/cases`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub id: String,
    #[serde(default)]
    pub case_number: Option<String>,
    pub title: String,
    pub category: CaseCategory,
    #[serde(default)]
    pub jenis_pekerjaan_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    pub status: CaseStatus,
    /// Calendar date (`YYYY-MM-DD`) or RFC3339 timestamp.
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CaseCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Body for create and update. The backend validates every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseInput {
    pub title: String,
    pub category: CaseCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jenis_pekerjaan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
