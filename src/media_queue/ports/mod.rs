//! Port contracts for the playback queue.

pub mod queue_source;

pub use queue_source::{QueueSource, QueueSourceError, QueueSourceResult};
