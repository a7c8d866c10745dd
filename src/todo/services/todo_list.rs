//! Service exposing one upstream task list as a host to-do list.

use crate::polling::{Coordinator, spawn_polling};
use crate::todo::{
    domain::{
        Agenda, RawTask, SUPPORTED_FEATURES, TaskId, TodoDomainError, TodoItem,
        TodoListDescriptor, TodoListFeature, order_and_filter_tasks, to_normalized, to_wire,
    },
    ports::{TasksApi, TasksApiError},
};
use chrono::TimeZone;
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Coordinator caching the raw tasks of one list.
pub type TaskListCoordinator = dyn Coordinator<Data = Vec<RawTask>, Error = TasksApiError>;

/// Service-level errors for to-do list operations.
#[derive(Debug, Error)]
pub enum TodoListError {
    /// A cached task could not be normalized.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// The tasks API call failed.
    #[error(transparent)]
    Api(#[from] TasksApiError),
    /// An update was requested for an item without a uid.
    #[error("to-do item '{0}' has no uid")]
    MissingUid(String),
}

/// Result type for to-do list service operations.
pub type TodoListResult<T> = Result<T, TodoListError>;

/// One upstream task list exposed as a host to-do list.
///
/// Every mutation calls the API and then refreshes the whole snapshot. The
/// cached snapshot is never patched locally.
#[derive(Clone)]
pub struct TodoListService<A, C, Z>
where
    A: TasksApi,
    C: Clock + Send + Sync,
    Z: TimeZone + Send + Sync,
{
    descriptor: TodoListDescriptor,
    api: Arc<A>,
    coordinator: Arc<TaskListCoordinator>,
    clock: Arc<C>,
    zone: Z,
}

impl<A, C, Z> TodoListService<A, C, Z>
where
    A: TasksApi,
    C: Clock + Send + Sync,
    Z: TimeZone + Send + Sync,
{
    /// Creates a to-do list service.
    ///
    /// `zone` is the local time zone used for due-date timestamps and for
    /// deciding what "today" is.
    #[must_use]
    pub const fn new(
        descriptor: TodoListDescriptor,
        api: Arc<A>,
        coordinator: Arc<TaskListCoordinator>,
        clock: Arc<C>,
        zone: Z,
    ) -> Self {
        Self {
            descriptor,
            api,
            coordinator,
            clock,
            zone,
        }
    }

    /// Returns the host-facing identity of the list.
    #[must_use]
    pub const fn descriptor(&self) -> &TodoListDescriptor {
        &self.descriptor
    }

    /// Returns the operations this list accepts.
    #[must_use]
    pub const fn supported_features(&self) -> &'static [TodoListFeature] {
        SUPPORTED_FEATURES
    }

    /// Returns the coordinator backing this list.
    #[must_use]
    pub fn coordinator(&self) -> Arc<TaskListCoordinator> {
        Arc::clone(&self.coordinator)
    }

    /// Refreshes the cached snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::Api`] when the fetch fails.
    pub async fn refresh(&self) -> TodoListResult<()> {
        let snapshot = self.coordinator.refresh().await?;
        tracing::debug!(
            list = %self.descriptor.task_list_id,
            tasks = snapshot.data().len(),
            "task list refreshed"
        );
        Ok(())
    }

    /// Starts refreshing the snapshot every `period`.
    #[must_use]
    pub fn start_polling(&self, period: Duration) -> JoinHandle<()> {
        spawn_polling(self.coordinator(), period)
    }

    /// Returns the current to-do items in display order.
    ///
    /// Returns `Ok(None)` when no snapshot has been fetched yet.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::Domain`] when a cached task carries a
    /// malformed due timestamp.
    pub fn todo_items(&self) -> TodoListResult<Option<Vec<TodoItem>>> {
        let Some(snapshot) = self.coordinator.current_snapshot() else {
            return Ok(None);
        };
        let items = order_and_filter_tasks(snapshot.into_data())
            .iter()
            .map(to_normalized)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(items))
    }

    /// Returns the current to-do items grouped relative to today.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::todo_items`].
    pub fn agenda(&self) -> TodoListResult<Option<Agenda>> {
        let today = self.clock.utc().with_timezone(&self.zone).date_naive();
        Ok(self
            .todo_items()?
            .map(|items| Agenda::group(items, today)))
    }

    /// Creates an item and refreshes the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::Api`] when the insert or the refresh fails.
    pub async fn create_item(&self, item: &TodoItem) -> TodoListResult<()> {
        let list_id = &self.descriptor.task_list_id;
        self.api.insert(list_id, &to_wire(item, &self.zone)).await?;
        tracing::info!(list = %list_id, summary = %item.summary, "to-do item created");
        self.refresh().await
    }

    /// Updates an item and refreshes the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::MissingUid`] when the item has no uid, or
    /// [`TodoListError::Api`] when the patch or the refresh fails.
    pub async fn update_item(&self, item: &TodoItem) -> TodoListResult<()> {
        let uid = item
            .uid
            .as_ref()
            .ok_or_else(|| TodoListError::MissingUid(item.summary.clone()))?;
        let list_id = &self.descriptor.task_list_id;
        self.api
            .patch(list_id, uid, &to_wire(item, &self.zone))
            .await?;
        tracing::info!(list = %list_id, uid = %uid, "to-do item updated");
        self.refresh().await
    }

    /// Deletes items and refreshes the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::Api`] when the delete or the refresh fails.
    pub async fn delete_items(&self, uids: &[TaskId]) -> TodoListResult<()> {
        let list_id = &self.descriptor.task_list_id;
        self.api.delete(list_id, uids).await?;
        tracing::info!(list = %list_id, count = uids.len(), "to-do items deleted");
        self.refresh().await
    }

    /// Moves an item directly after `previous_uid`, or to the head of the
    /// list, and refreshes the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::Api`] when the move or the refresh fails.
    pub async fn move_item(&self, uid: &TaskId, previous_uid: Option<&TaskId>) -> TodoListResult<()> {
        let list_id = &self.descriptor.task_list_id;
        self.api.move_task(list_id, uid, previous_uid).await?;
        tracing::info!(
            list = %list_id,
            uid = %uid,
            previous = previous_uid.map(TaskId::as_str),
            "to-do item moved"
        );
        self.refresh().await
    }
}
