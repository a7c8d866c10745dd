//! Domain model for task-backed to-do lists.
//!
//! Upstream task records are converted into host to-do items and back. All
//! functions here are pure: they take a snapshot by value or reference and
//! return new values.

mod agenda;
mod due;
mod error;
mod ids;
mod item;
mod list;
mod order;
mod status;
mod task;
mod wire;

pub use agenda::{Agenda, AgendaBucket};
pub use due::{parse_due_timestamp, resolve_due_date, scan_text_date};
pub use error::TodoDomainError;
pub use ids::{TaskId, TaskListId};
pub use item::{TodoItem, to_normalized};
pub use list::{SUPPORTED_FEATURES, TaskListInfo, TodoListDescriptor, TodoListFeature};
pub use order::order_and_filter_tasks;
pub use status::TodoItemStatus;
pub use task::RawTask;
pub use wire::{TaskPatch, to_wire};
