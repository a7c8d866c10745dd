//! Generic poll-and-cache coordination.
//!
//! A [`Coordinator`] owns the single cached snapshot of some upstream data.
//! Readers only ever see whole snapshots; a refresh replaces the snapshot in
//! one step and a failed refresh leaves the previous one in place.

mod coordinator;
mod ports;
mod snapshot;

pub use coordinator::{CachedCoordinator, Coordinator, spawn_polling};
pub use ports::Fetcher;
pub use snapshot::Snapshot;
