//! In-memory adapters for playback queue ports.

mod queue_source;

pub use queue_source::InMemoryQueueSource;
