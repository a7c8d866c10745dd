//! Application services for the playback queue.

mod queue;

pub use queue::{MediaQueueError, MediaQueueResult, MediaQueueService, QueueCoordinator, QueueFetcher};
