//! Creation of one to-do list service per upstream task list.

use super::{TaskListFetcher, TodoListResult, TodoListService};
use crate::config::AdapterConfig;
use crate::polling::CachedCoordinator;
use crate::todo::{domain::TodoListDescriptor, ports::TasksApi};
use chrono::TimeZone;
use mockable::Clock;
use std::sync::Arc;

/// Lists the account's task lists and builds a service for each.
///
/// The returned services have no snapshot yet; call
/// [`TodoListService::refresh`] or start polling before reading items.
///
/// # Errors
///
/// Returns [`super::TodoListError::Api`] when listing task lists fails.
pub async fn discover_todo_lists<A, C, Z>(
    api: Arc<A>,
    config: &AdapterConfig,
    clock: Arc<C>,
    zone: &Z,
) -> TodoListResult<Vec<TodoListService<A, C, Z>>>
where
    A: TasksApi + 'static,
    C: Clock + Send + Sync + 'static,
    Z: TimeZone + Send + Sync,
{
    let task_lists = api.list_task_lists().await?;
    tracing::info!(count = task_lists.len(), "discovered task lists");

    Ok(task_lists
        .iter()
        .map(|list| {
            let descriptor = TodoListDescriptor::new(&config.config_entry_id, list);
            let fetcher = TaskListFetcher::new(Arc::clone(&api), list.id.clone());
            let coordinator =
                CachedCoordinator::new(descriptor.unique_id.clone(), fetcher, Arc::clone(&clock));
            TodoListService::new(
                descriptor,
                Arc::clone(&api),
                Arc::new(coordinator),
                Arc::clone(&clock),
                zone.clone(),
            )
        })
        .collect())
}
