//! Completion status of a to-do item and its upstream string encoding.

use serde::{Deserialize, Serialize};

const API_NEEDS_ACTION: &str = "needsAction";
const API_COMPLETED: &str = "completed";

/// Completion status of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoItemStatus {
    /// The item still needs to be done.
    #[default]
    NeedsAction,
    /// The item has been completed.
    Completed,
}

impl TodoItemStatus {
    /// Maps an upstream status string onto a status.
    ///
    /// Unknown or missing values resolve to [`Self::NeedsAction`].
    #[must_use]
    pub fn from_api(value: Option<&str>) -> Self {
        match value {
            Some(API_COMPLETED) => Self::Completed,
            _ => Self::NeedsAction,
        }
    }

    /// Returns the upstream string encoding.
    #[must_use]
    pub const fn as_api_str(self) -> &'static str {
        match self {
            Self::NeedsAction => API_NEEDS_ACTION,
            Self::Completed => API_COMPLETED,
        }
    }
}
