//! Wire payload for create and update calls.

use super::{TodoItem, TodoItemStatus};
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

/// Task body sent to the tasks API on insert and patch.
///
/// `notes` and `due` are always serialized, as `null` when unset, so that a
/// patch clears them upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// Task title.
    pub title: String,
    /// Upstream status string.
    pub status: String,
    /// Start of the local due day as an ISO-8601 timestamp.
    pub due: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Builds the wire payload for a to-do item.
///
/// The due date is sent as the start of that day in `zone`; the API keeps
/// only the date but expects a full timestamp.
#[must_use]
pub fn to_wire<Tz: TimeZone>(item: &TodoItem, zone: &Tz) -> TaskPatch {
    let status = item.status.unwrap_or(TodoItemStatus::NeedsAction);
    TaskPatch {
        title: item.summary.clone(),
        status: status.as_api_str().to_owned(),
        due: item
            .due
            .map(|due| start_of_local_day(due, zone).to_rfc3339_opts(SecondsFormat::Secs, false)),
        notes: item.description.clone(),
    }
}

/// Returns local midnight of `date` in `zone`.
///
/// When midnight does not exist (a DST gap), the first whole hour of that day
/// that does exist is used.
fn start_of_local_day<Tz: TimeZone>(date: NaiveDate, zone: &Tz) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    zone.from_local_datetime(&midnight).earliest().unwrap_or_else(|| {
        (1..=24)
            .filter_map(|hour| {
                let shifted = midnight + TimeDelta::hours(hour);
                zone.from_local_datetime(&shifted).earliest()
            })
            .next()
            .unwrap_or_else(|| zone.from_utc_datetime(&midnight))
    })
}
