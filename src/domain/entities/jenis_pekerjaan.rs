use serde::{Deserialize, Serialize};

use super::case::CaseCategory;

/// Kind of deed work (AJB, APHT, pendirian PT, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JenisPekerjaan {
    pub id: String,
    pub name: String,
    pub category: CaseCategory,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JenisPekerjaanInput {
    pub name: String,
    pub category: CaseCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
