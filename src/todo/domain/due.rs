//! Due-date resolution for upstream tasks.
//!
//! The structured `due` field always wins. Older task sources carried no
//! structured field, so a `YYYY/MM/DD` substring in the title or the notes is
//! accepted as a fallback.

use super::{RawTask, TodoDomainError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is covered by unit tests"
)]
static TEXT_DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}/[0-9]{2}/[0-9]{2}").expect("valid date pattern"));

const TEXT_DATE_FORMAT: &str = "%Y/%m/%d";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Extended ISO-8601 timestamps, seconds first. `%#z` accepts `Z`, `+HH`,
/// `+HHMM` and `+HH:MM`.
const OFFSET_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Resolves the calendar due date of a task.
///
/// Returns `Ok(None)` when neither the structured field nor the free text
/// carries a date.
///
/// # Errors
///
/// Returns [`TodoDomainError::InvalidDueTimestamp`] when `due` is present but
/// cannot be parsed.
pub fn resolve_due_date(task: &RawTask) -> Result<Option<NaiveDate>, TodoDomainError> {
    if let Some(due) = task.due.as_deref() {
        return parse_due_timestamp(due).map(Some);
    }

    let from_title = scan_text_date(&task.title);
    Ok(from_title.or_else(|| task.notes.as_deref().and_then(scan_text_date)))
}

/// Parses the structured `due` field and keeps only its calendar date.
///
/// Accepts extended ISO-8601 timestamps with or without an offset, with
/// minute or second precision and a `T` or space separator, as well as
/// bare dates. For an offset timestamp the date is taken in that offset, not
/// converted to UTC.
///
/// # Errors
///
/// Returns [`TodoDomainError::InvalidDueTimestamp`] for any other input.
pub fn parse_due_timestamp(value: &str) -> Result<NaiveDate, TodoDomainError> {
    let trimmed = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    let normalized = trimmed.replacen(' ', "T", 1);
    let with_offset = OFFSET_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
        .map(|timestamp| timestamp.date_naive());
    let without_offset = || {
        NAIVE_TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
            .map(|timestamp| timestamp.date())
    };
    with_offset
        .or_else(without_offset)
        .or_else(|| NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok())
        .ok_or_else(|| TodoDomainError::InvalidDueTimestamp(value.to_owned()))
}

/// Finds the first `YYYY/MM/DD` substring that is a real calendar date.
#[must_use]
pub fn scan_text_date(text: &str) -> Option<NaiveDate> {
    TEXT_DATE_PATTERN
        .find_iter(text)
        .find_map(|found| NaiveDate::parse_from_str(found.as_str(), TEXT_DATE_FORMAT).ok())
}
