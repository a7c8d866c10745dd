//! Client port for the upstream tasks API.

use crate::todo::domain::{RawTask, TaskId, TaskListId, TaskListInfo, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tasks API calls.
pub type TasksApiResult<T> = Result<T, TasksApiError>;

/// Task-list source contract.
///
/// Authentication, transport and retry policy live behind this trait.
#[async_trait]
pub trait TasksApi: Send + Sync {
    /// Lists every task list of the account.
    async fn list_task_lists(&self) -> TasksApiResult<Vec<TaskListInfo>>;

    /// Lists every task of one list, sub-tasks included, in any order.
    ///
    /// # Errors
    ///
    /// Returns [`TasksApiError::ListNotFound`] when the list does not exist.
    async fn list_tasks(&self, list_id: &TaskListId) -> TasksApiResult<Vec<RawTask>>;

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`TasksApiError::ListNotFound`] when the list does not exist.
    async fn insert(&self, list_id: &TaskListId, task: &TaskPatch) -> TasksApiResult<()>;

    /// Replaces the mutable fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TasksApiError::TaskNotFound`] when the task does not exist.
    async fn patch(
        &self,
        list_id: &TaskListId,
        task_id: &TaskId,
        task: &TaskPatch,
    ) -> TasksApiResult<()>;

    /// Deletes tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TasksApiError::TaskNotFound`] for the first unknown id.
    async fn delete(&self, list_id: &TaskListId, task_ids: &[TaskId]) -> TasksApiResult<()>;

    /// Moves a task directly after `previous`, or to the head when `None`.
    ///
    /// The API assigns the resulting position.
    ///
    /// # Errors
    ///
    /// Returns [`TasksApiError::TaskNotFound`] when either task is unknown.
    async fn move_task(
        &self,
        list_id: &TaskListId,
        task_id: &TaskId,
        previous: Option<&TaskId>,
    ) -> TasksApiResult<()>;
}

/// Errors returned by tasks API clients.
#[derive(Debug, Clone, Error)]
pub enum TasksApiError {
    /// The task list does not exist.
    #[error("task list not found: {0}")]
    ListNotFound(TaskListId),

    /// The task does not exist in the list.
    #[error("task {task_id} not found in list {list_id}")]
    TaskNotFound {
        /// List identifier.
        list_id: TaskListId,
        /// Task identifier.
        task_id: TaskId,
    },

    /// Network, authentication or decoding failure.
    #[error("tasks API transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TasksApiError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
