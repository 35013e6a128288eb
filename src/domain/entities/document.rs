use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::case::CaseCategory;

/// Checklist of documents a kind of case needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentRequirementTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<CaseCategory>,
    #[serde(default)]
    pub jenis_pekerjaan_id: Option<String>,
    #[serde(default)]
    pub items: Vec<DocumentRequirementItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentRequirementItem {
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRequirementTemplateInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CaseCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jenis_pekerjaan_id: Option<String>,
    pub items: Vec<DocumentRequirementItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Uploaded,
    Verified,
    Rejected,
    #[serde(other)]
    Other,
}

/// One checklist row on a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDocumentEntry {
    pub id: String,
    pub case_id: String,
    pub name: String,
    #[serde(default)]
    pub required: bool,
    pub status: DocumentStatus,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub verified_by: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseDocumentUpdate {
    pub status: DocumentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// File bytes for the multipart upload endpoint.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}
