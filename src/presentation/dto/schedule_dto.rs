use super::Validate;
use crate::domain::derivations::{DerivationError, local_rfc3339_with_offset};
use crate::domain::entities::ScheduleEventInput;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

const ALL_DAY_START: &str = "00:00";
const ALL_DAY_END: &str = "23:59";

/// Schedule form as entered: a calendar date plus wall-clock times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEventForm {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`; ignored for all-day events.
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub all_day: bool,
}

impl Validate for ScheduleEventForm {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Judul jadwal wajib diisi".to_string());
        }
        if self.date.trim().is_empty() {
            return Err("Tanggal jadwal wajib diisi".to_string());
        }
        if !self.all_day && (blank(&self.start_time) || blank(&self.end_time)) {
            return Err("Jam mulai dan jam selesai wajib diisi".to_string());
        }
        Ok(())
    }
}

impl ScheduleEventForm {
    /// Builds the request body with both timestamps carrying `offset`.
    pub fn to_input(&self, offset: FixedOffset) -> Result<ScheduleEventInput, DerivationError> {
        let (start, end) = if self.all_day {
            (ALL_DAY_START, ALL_DAY_END)
        } else {
            (
                self.start_time.as_deref().unwrap_or_default(),
                self.end_time.as_deref().unwrap_or_default(),
            )
        };

        Ok(ScheduleEventInput {
            title: self.title.trim().to_string(),
            description: non_blank(&self.description),
            case_id: non_blank(&self.case_id),
            location: non_blank(&self.location),
            start_at: local_rfc3339_with_offset(&self.date, start, offset)?,
            end_at: local_rfc3339_with_offset(&self.date, end, offset)?,
            all_day: self.all_day,
        })
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
