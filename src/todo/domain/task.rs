//! Raw task record as returned by the tasks API.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// One task as delivered by the upstream tasks API.
///
/// Only the fields the adapter reads are modelled; everything else in the
/// upstream payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTask {
    /// Upstream task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Upstream status string (`needsAction` or `completed`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Due timestamp with date resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// Parent task identifier for sub-tasks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<TaskId>,
    /// Sibling order key; string order equals display order.
    pub position: String,
}

impl RawTask {
    /// Creates a top-level task record with required fields only.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(id),
            title: title.into(),
            notes: None,
            status: None,
            due: None,
            parent: None,
            position: position.into(),
        }
    }

    /// Sets notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the upstream status string.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the due timestamp string.
    #[must_use]
    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }

    /// Marks the task as a sub-task of `parent`.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(TaskId::new(parent));
        self
    }

    /// Returns `true` when the task has no parent.
    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}
