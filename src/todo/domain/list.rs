//! Task list metadata and the to-do list descriptor derived from it.

use super::TaskListId;
use serde::{Deserialize, Serialize};

/// One task list as returned by the tasks API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListInfo {
    /// Upstream list identifier.
    pub id: TaskListId,
    /// Upstream list title.
    pub title: String,
}

impl TaskListInfo {
    /// Creates list metadata.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: TaskListId::new(id),
            title: title.into(),
        }
    }
}

/// Operations a to-do list accepts from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoListFeature {
    /// New items can be created.
    CreateItem,
    /// Existing items can be updated.
    UpdateItem,
    /// Items can be deleted.
    DeleteItem,
    /// Items can be reordered.
    MoveItem,
    /// Items accept a due date.
    SetDueDate,
    /// Items accept a description.
    SetDescription,
}

/// Features every task-backed to-do list supports.
pub const SUPPORTED_FEATURES: &[TodoListFeature] = &[
    TodoListFeature::CreateItem,
    TodoListFeature::UpdateItem,
    TodoListFeature::DeleteItem,
    TodoListFeature::MoveItem,
    TodoListFeature::SetDueDate,
    TodoListFeature::SetDescription,
];

/// Host-facing identity of one to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListDescriptor {
    /// Stable unique id, `"{config_entry_id}-{task_list_id}"`.
    pub unique_id: String,
    /// Display name.
    pub name: String,
    /// Upstream list identifier.
    pub task_list_id: TaskListId,
}

impl TodoListDescriptor {
    /// Derives the descriptor for `list` under a configuration entry.
    #[must_use]
    pub fn new(config_entry_id: &str, list: &TaskListInfo) -> Self {
        Self {
            unique_id: format!("{config_entry_id}-{}", list.id),
            name: capitalize(&list.title),
            task_list_id: list.id.clone(),
        }
    }

    /// Returns `true` when the list supports `feature`.
    #[must_use]
    pub fn supports(&self, feature: TodoListFeature) -> bool {
        SUPPORTED_FEATURES.contains(&feature)
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
