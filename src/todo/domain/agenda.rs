//! Grouping of to-do items relative to the current day.

use super::TodoItem;
use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

/// Relative due-date bucket of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgendaBucket {
    /// Due before today.
    Overdue,
    /// Due today.
    Today,
    /// Due after today, up to and including the coming Sunday.
    ThisWeek,
    /// Due after the coming Sunday.
    Upcoming,
    /// No due date.
    Unscheduled,
}

impl AgendaBucket {
    /// Places a due date relative to `today`.
    #[must_use]
    pub fn classify(due: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(due) = due else {
            return Self::Unscheduled;
        };
        let days_to_sunday = 6 - i64::from(today.weekday().num_days_from_monday());
        let week_end = today + TimeDelta::days(days_to_sunday);
        if due < today {
            Self::Overdue
        } else if due == today {
            Self::Today
        } else if due <= week_end {
            Self::ThisWeek
        } else {
            Self::Upcoming
        }
    }
}

/// To-do items grouped by [`AgendaBucket`], each group in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agenda {
    /// Items due before today.
    pub overdue: Vec<TodoItem>,
    /// Items due today.
    pub today: Vec<TodoItem>,
    /// Items due later this week.
    pub this_week: Vec<TodoItem>,
    /// Items due after this week.
    pub upcoming: Vec<TodoItem>,
    /// Items without a due date.
    pub unscheduled: Vec<TodoItem>,
}

impl Agenda {
    /// Groups `items` relative to `today`.
    #[must_use]
    pub fn group(items: impl IntoIterator<Item = TodoItem>, today: NaiveDate) -> Self {
        let mut agenda = Self::default();
        for item in items {
            agenda.bucket_mut(AgendaBucket::classify(item.due, today)).push(item);
        }
        agenda
    }

    /// Returns the items in `bucket`.
    #[must_use]
    pub fn bucket(&self, bucket: AgendaBucket) -> &[TodoItem] {
        match bucket {
            AgendaBucket::Overdue => &self.overdue,
            AgendaBucket::Today => &self.today,
            AgendaBucket::ThisWeek => &self.this_week,
            AgendaBucket::Upcoming => &self.upcoming,
            AgendaBucket::Unscheduled => &self.unscheduled,
        }
    }

    const fn bucket_mut(&mut self, bucket: AgendaBucket) -> &mut Vec<TodoItem> {
        match bucket {
            AgendaBucket::Overdue => &mut self.overdue,
            AgendaBucket::Today => &mut self.today,
            AgendaBucket::ThisWeek => &mut self.this_week,
            AgendaBucket::Upcoming => &mut self.upcoming,
            AgendaBucket::Unscheduled => &mut self.unscheduled,
        }
    }
}
