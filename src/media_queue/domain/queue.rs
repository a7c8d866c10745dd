//! Flattening of raw queue entries into display records.

use super::{RawArtist, RawImage, RawQueueEntry, RawQueueResponse};
use serde::{Deserialize, Serialize};

/// One queued item as shown by the media player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    /// Display title.
    pub media_title: Option<String>,
    /// Item type.
    pub media_type: Option<String>,
    /// Service-side identifier.
    pub media_id: Option<String>,
    /// Cover image url.
    pub image: Option<String>,
    /// API link to the item.
    pub href: Option<String>,
    /// Length in milliseconds.
    pub duration_ms: Option<u64>,
    /// Credited creators, or `None` when the entry lists none.
    pub media_creators: Option<Vec<MediaCreator>>,
}

/// One credited creator of a queued item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaCreator {
    /// Creator name.
    pub name: Option<String>,
    /// Service-side identifier.
    pub id: Option<String>,
    /// Creator type.
    pub creator_type: Option<String>,
}

impl From<&RawArtist> for MediaCreator {
    fn from(artist: &RawArtist) -> Self {
        Self {
            name: artist.name.clone(),
            id: artist.id.clone(),
            creator_type: artist.artist_type.clone(),
        }
    }
}

impl From<&RawQueueEntry> for QueueItem {
    fn from(entry: &RawQueueEntry) -> Self {
        let creators: Vec<MediaCreator> = entry
            .artists
            .iter()
            .flatten()
            .map(MediaCreator::from)
            .collect();
        Self {
            media_title: entry.name.clone(),
            media_type: entry.item_type.clone(),
            media_id: entry.id.clone(),
            image: entry
                .album
                .as_ref()
                .and_then(|album| album.images.as_deref())
                .and_then(fetch_image_url),
            href: entry.href.clone(),
            duration_ms: entry.duration_ms,
            media_creators: (!creators.is_empty()).then_some(creators),
        }
    }
}

/// Returns the url of the first image, if any.
#[must_use]
pub fn fetch_image_url(images: &[RawImage]) -> Option<String> {
    images.first().and_then(|image| image.url.clone())
}

/// Formats a queue response for display.
///
/// No response means nothing is playing and yields an empty queue.
#[must_use]
pub fn format_queue(response: Option<&RawQueueResponse>) -> Vec<QueueItem> {
    response
        .map(|queue| queue.entries().iter().map(QueueItem::from).collect())
        .unwrap_or_default()
}
