//! Task-backed to-do lists.
//!
//! Tasks fetched from a cloud task-management API are presented as host
//! to-do items: sub-tasks are filtered out, siblings are ordered by position,
//! statuses are mapped onto a two-state enum and due dates are resolved from
//! the structured field or, failing that, from free text. Host edits travel
//! the other way as wire payloads. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
