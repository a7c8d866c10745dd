//! Port contracts for task-backed to-do lists.
//!
//! Ports define infrastructure-agnostic interfaces used by to-do services.

pub mod tasks_api;

pub use tasks_api::{TasksApi, TasksApiError, TasksApiResult};
