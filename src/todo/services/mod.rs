//! Application services for task-backed to-do lists.

mod discovery;
mod fetcher;
mod todo_list;

pub use discovery::discover_todo_lists;
pub use fetcher::TaskListFetcher;
pub use todo_list::{TaskListCoordinator, TodoListError, TodoListResult, TodoListService};
