use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolStatus {
    Active,
    Closed,
    #[serde(other)]
    Other,
}

/// Digital protocol row: where the physical minuta of a deed is stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProtocolEntry {
    pub id: String,
    #[serde(default)]
    pub case_id: Option<String>,
    pub deed_number: String,
    #[serde(default)]
    pub repertorium_number: Option<String>,
    pub deed_date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub storage_location: Option<String>,
    pub status: ProtocolStatus,
}

/// Klapper row: one party named in a registered deed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KlapperEntry {
    pub id: String,
    pub party_name: String,
    pub deed_number: String,
    pub deed_date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub protocol_entry_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtocolQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProtocolStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KlapperQuery {
    /// Initial letter of the party name, as printed on the klapper tabs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}
