//! In-memory adapters for to-do list ports.

mod tasks_api;

pub use tasks_api::InMemoryTasksApi;
