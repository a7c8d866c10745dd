//! Bridges one upstream task list to the generic coordinator.

use crate::polling::Fetcher;
use crate::todo::{
    domain::{RawTask, TaskListId},
    ports::{TasksApi, TasksApiError},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Fetches every raw task of one list.
#[derive(Clone)]
pub struct TaskListFetcher<A>
where
    A: TasksApi,
{
    api: Arc<A>,
    list_id: TaskListId,
}

impl<A> TaskListFetcher<A>
where
    A: TasksApi,
{
    /// Creates a fetcher for `list_id`.
    #[must_use]
    pub const fn new(api: Arc<A>, list_id: TaskListId) -> Self {
        Self { api, list_id }
    }

    /// Returns the fetched list identifier.
    #[must_use]
    pub const fn list_id(&self) -> &TaskListId {
        &self.list_id
    }
}

#[async_trait]
impl<A> Fetcher for TaskListFetcher<A>
where
    A: TasksApi,
{
    type Output = Vec<RawTask>;
    type Error = TasksApiError;

    async fn fetch(&self) -> Result<Vec<RawTask>, TasksApiError> {
        self.api.list_tasks(&self.list_id).await
    }
}
