//! In-memory tasks API for tests and local runs.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};
use uuid::Uuid;

use crate::todo::{
    domain::{RawTask, TaskId, TaskListId, TaskListInfo, TaskPatch},
    ports::{TasksApi, TasksApiError, TasksApiResult},
};

/// Thread-safe in-memory tasks API.
///
/// New tasks are inserted at the head of their list. Sibling positions are
/// renumbered as zero-padded 20-digit strings after every insert and move;
/// a task can only be moved after one of its own siblings. Moving a task
/// after itself leaves the order unchanged.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTasksApi {
    state: Arc<RwLock<InMemoryTasksState>>,
}

#[derive(Debug, Default)]
struct InMemoryTasksState {
    lists: Vec<InMemoryList>,
    unavailable: bool,
}

#[derive(Debug)]
struct InMemoryList {
    info: TaskListInfo,
    tasks: Vec<RawTask>,
}

#[derive(Debug, thiserror::Error)]
#[error("tasks service unavailable")]
struct Unavailable;

impl InMemoryTasksApi {
    /// Creates an API with no task lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task list holding `tasks` in the given order.
    ///
    /// Positions already present on `tasks` define the initial order.
    #[must_use]
    pub fn with_task_list(
        self,
        id: impl Into<String>,
        title: impl Into<String>,
        tasks: impl IntoIterator<Item = RawTask>,
    ) -> Self {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .lists
            .push(InMemoryList {
                info: TaskListInfo::new(id, title),
                tasks: tasks.into_iter().collect(),
            });
        self
    }

    /// Makes every subsequent call fail with a transport error, or succeed
    /// again.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .unavailable = unavailable;
    }

    fn lock_state(&self) -> TasksApiResult<RwLockWriteGuard<'_, InMemoryTasksState>> {
        let state = self
            .state
            .write()
            .map_err(|err| TasksApiError::transport(std::io::Error::other(err.to_string())))?;
        if state.unavailable {
            return Err(TasksApiError::transport(Unavailable));
        }
        Ok(state)
    }
}

impl InMemoryTasksState {
    fn list_mut(&mut self, list_id: &TaskListId) -> TasksApiResult<&mut InMemoryList> {
        self.lists
            .iter_mut()
            .find(|list| &list.info.id == list_id)
            .ok_or_else(|| TasksApiError::ListNotFound(list_id.clone()))
    }
}

impl InMemoryList {
    fn index_of(&self, task_id: &TaskId) -> TasksApiResult<usize> {
        self.tasks
            .iter()
            .position(|task| &task.id == task_id)
            .ok_or_else(|| TasksApiError::TaskNotFound {
                list_id: self.info.id.clone(),
                task_id: task_id.clone(),
            })
    }

    /// Returns the ids of the tasks under `parent` in position order.
    fn sibling_order(&self, parent: Option<&TaskId>) -> Vec<TaskId> {
        let mut siblings: Vec<&RawTask> = self
            .tasks
            .iter()
            .filter(|task| task.parent.as_ref() == parent)
            .collect();
        siblings.sort_by(|left, right| left.position.cmp(&right.position));
        siblings.into_iter().map(|task| task.id.clone()).collect()
    }

    /// Numbers the tasks in `order` as consecutive sibling positions.
    fn assign_positions(&mut self, order: &[TaskId]) {
        for (slot, task_id) in order.iter().enumerate() {
            if let Some(task) = self.tasks.iter_mut().find(|task| &task.id == task_id) {
                task.position = format!("{slot:020}");
            }
        }
    }
}

fn apply_patch(task: &mut RawTask, patch: &TaskPatch) {
    task.title.clone_from(&patch.title);
    task.status = Some(patch.status.clone());
    task.due.clone_from(&patch.due);
    task.notes.clone_from(&patch.notes);
}

#[async_trait]
impl TasksApi for InMemoryTasksApi {
    async fn list_task_lists(&self) -> TasksApiResult<Vec<TaskListInfo>> {
        let state = self.lock_state()?;
        Ok(state.lists.iter().map(|list| list.info.clone()).collect())
    }

    async fn list_tasks(&self, list_id: &TaskListId) -> TasksApiResult<Vec<RawTask>> {
        let mut state = self.lock_state()?;
        Ok(state.list_mut(list_id)?.tasks.clone())
    }

    async fn insert(&self, list_id: &TaskListId, task: &TaskPatch) -> TasksApiResult<()> {
        let mut state = self.lock_state()?;
        let list = state.list_mut(list_id)?;
        let mut created = RawTask::new(Uuid::new_v4().simple().to_string(), "", "");
        apply_patch(&mut created, task);
        let mut order = list.sibling_order(None);
        order.insert(0, created.id.clone());
        list.tasks.push(created);
        list.assign_positions(&order);
        Ok(())
    }

    async fn patch(
        &self,
        list_id: &TaskListId,
        task_id: &TaskId,
        task: &TaskPatch,
    ) -> TasksApiResult<()> {
        let mut state = self.lock_state()?;
        let list = state.list_mut(list_id)?;
        let index = list.index_of(task_id)?;
        if let Some(existing) = list.tasks.get_mut(index) {
            apply_patch(existing, task);
        }
        Ok(())
    }

    async fn delete(&self, list_id: &TaskListId, task_ids: &[TaskId]) -> TasksApiResult<()> {
        let mut state = self.lock_state()?;
        let list = state.list_mut(list_id)?;
        for task_id in task_ids {
            list.index_of(task_id)?;
        }
        list.tasks.retain(|task| !task_ids.contains(&task.id));
        Ok(())
    }

    async fn move_task(
        &self,
        list_id: &TaskListId,
        task_id: &TaskId,
        previous: Option<&TaskId>,
    ) -> TasksApiResult<()> {
        let mut state = self.lock_state()?;
        let list = state.list_mut(list_id)?;
        let index = list.index_of(task_id)?;
        if previous == Some(task_id) {
            return Ok(());
        }
        let parent = list.tasks.get(index).and_then(|task| task.parent.clone());
        let mut order = list.sibling_order(parent.as_ref());
        order.retain(|sibling| sibling != task_id);
        let target = match previous {
            Some(previous_id) => {
                order
                    .iter()
                    .position(|sibling| sibling == previous_id)
                    .ok_or_else(|| TasksApiError::TaskNotFound {
                        list_id: list_id.clone(),
                        task_id: previous_id.clone(),
                    })?
                    + 1
            }
            None => 0,
        };
        order.insert(target, task_id.clone());
        list.assign_positions(&order);
        Ok(())
    }
}
