//! Domain model for the playback queue.
//!
//! Raw queue payloads are decoded leniently and flattened into display
//! records. Missing data at any depth becomes `None` instead of an error.

mod content_id;
mod lenient;
mod queue;
mod raw;

pub use content_id::ContentIdScheme;
pub use queue::{MediaCreator, QueueItem, fetch_image_url, format_queue};
pub use raw::{RawAlbum, RawArtist, RawImage, RawQueueEntry, RawQueueResponse};
