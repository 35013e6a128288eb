//! Status-derived values used by the case and schedule views.
//!
//! Everything here is pure apart from the thin `*_now` style wrappers that
//! read the local clock and offset.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};
use thiserror::Error;

use super::entities::Task;

const DATE_FORMAT: &str = "%Y-%m-%d";
const RFC3339_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%:z";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DerivationError {
    #[error("Format tanggal tidak valid: {0}")]
    InvalidDate(String),
    #[error("Format jam tidak valid: {0}")]
    InvalidTime(String),
}

/// Reads a target/due date given either as `YYYY-MM-DD` or as an RFC3339
/// timestamp (converted to the calendar date at `offset`).
pub fn parse_calendar_date(raw: &str, offset: &FixedOffset) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(offset).date_naive())
}

/// Whole calendar days from `today` to `target`, negative when past.
pub fn days_until_target_on(
    target: Option<&str>,
    today: NaiveDate,
    offset: &FixedOffset,
) -> Option<i64> {
    let target = parse_calendar_date(target?, offset)?;
    Some((target - today).num_days())
}

pub fn days_until_target(target: Option<&str>) -> Option<i64> {
    let now = Local::now();
    days_until_target_on(target, now.date_naive(), &now.offset().fix())
}

/// Share of done tasks, rounded to the nearest whole percent.
pub fn progress_percent(tasks: &[Task]) -> u8 {
    let done = tasks.iter().filter(|task| task.status.is_done()).count();
    progress_from_counts(done, tasks.len())
}

pub fn progress_from_counts(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = done.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

/// `today` must be formatted `YYYY-MM-DD`; the comparison is lexical.
pub fn is_overdue_on(task: &Task, today: &str) -> bool {
    match task.due_date.as_deref() {
        Some(due) if !due.is_empty() => due < today && !task.status.is_done(),
        _ => false,
    }
}

pub fn is_overdue(task: &Task) -> bool {
    is_overdue_on(task, &today_string())
}

pub fn today_string() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Offset of the machine's local zone right now.
///
/// Schedule timestamps are built with this offset even for dates in another
/// DST period, matching how the office web client has always stored them.
pub fn current_utc_offset() -> FixedOffset {
    Local::now().offset().fix()
}

/// Joins a `YYYY-MM-DD` date and an `HH:MM[:SS]` time into an RFC3339 string
/// carrying `offset`.
pub fn local_rfc3339_with_offset(
    date: &str,
    time: &str,
    offset: FixedOffset,
) -> Result<String, DerivationError> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| DerivationError::InvalidDate(date.to_string()))?;
    let time = parse_time_of_day(time)?;
    let local = offset
        .from_local_datetime(&NaiveDateTime::new(date, time))
        .single()
        .ok_or_else(|| DerivationError::InvalidTime(time.to_string()))?;
    Ok(local.format(RFC3339_SECONDS).to_string())
}

pub fn local_rfc3339(date: &str, time: &str) -> Result<String, DerivationError> {
    local_rfc3339_with_offset(date, time, current_utc_offset())
}

fn parse_time_of_day(raw: &str) -> Result<NaiveTime, DerivationError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| DerivationError::InvalidTime(raw.to_string()))
}
