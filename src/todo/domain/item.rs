//! Normalized to-do item exposed to the host UI.

use super::{RawTask, TaskId, TodoDomainError, TodoItemStatus, resolve_due_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A to-do item in the host vocabulary.
///
/// Items read from a snapshot always carry a uid and a status. Items built by
/// the host for create calls may leave both unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Upstream task identifier.
    pub uid: Option<TaskId>,
    /// One-line summary, mapped from the task title.
    pub summary: String,
    /// Longer description, mapped from the task notes.
    pub description: Option<String>,
    /// Completion status.
    pub status: Option<TodoItemStatus>,
    /// Calendar due date without a time component.
    pub due: Option<NaiveDate>,
}

impl TodoItem {
    /// Creates an item with only a summary set.
    #[must_use]
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            uid: None,
            summary: summary.into(),
            description: None,
            status: None,
            due: None,
        }
    }

    /// Sets the upstream uid.
    #[must_use]
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(TaskId::new(uid));
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TodoItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }
}

impl TryFrom<&RawTask> for TodoItem {
    type Error = TodoDomainError;

    fn try_from(raw: &RawTask) -> Result<Self, Self::Error> {
        Ok(Self {
            uid: Some(raw.id.clone()),
            summary: raw.title.clone(),
            description: raw.notes.clone(),
            status: Some(TodoItemStatus::from_api(raw.status.as_deref())),
            due: resolve_due_date(raw)?,
        })
    }
}

/// Converts an upstream task into a to-do item.
///
/// # Errors
///
/// Returns [`TodoDomainError::InvalidDueTimestamp`] when the task carries a
/// malformed `due` field.
pub fn to_normalized(raw: &RawTask) -> Result<TodoItem, TodoDomainError> {
    TodoItem::try_from(raw)
}
