//! Shared world state for to-do list BDD scenarios.

use chrono::Utc;
use domicile::todo::{
    adapters::memory::InMemoryTasksApi,
    domain::{TaskId, TodoItem},
    services::{TodoListError, TodoListService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTodoListService = TodoListService<InMemoryTasksApi, DefaultClock, Utc>;

/// Scenario world for to-do list behaviour tests.
#[derive(Default)]
pub struct TodoListWorld {
    pub api: InMemoryTasksApi,
    pub service: Option<TestTodoListService>,
    pub last_result: Option<Result<(), TodoListError>>,
}

impl TodoListWorld {
    /// Returns the service under test.
    pub fn service(&self) -> Result<&TestTodoListService, eyre::Report> {
        self.service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing to-do list service in scenario world"))
    }

    /// Returns the current items in display order.
    pub fn items(&self) -> Result<Vec<TodoItem>, eyre::Report> {
        self.service()?
            .todo_items()?
            .ok_or_else(|| eyre::eyre!("to-do list has no snapshot"))
    }

    /// Looks up the uid of the item titled `summary`.
    pub fn uid_of(&self, summary: &str) -> Result<TaskId, eyre::Report> {
        self.items()?
            .into_iter()
            .find(|item| item.summary == summary)
            .and_then(|item| item.uid)
            .ok_or_else(|| eyre::eyre!("no item titled '{summary}'"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoListWorld {
    TodoListWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
