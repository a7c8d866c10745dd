//! Raw queue payload as returned by the streaming service.

use super::lenient;
use serde::{Deserialize, Serialize};

/// Response of the "currently queued tracks" endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQueueResponse {
    /// Queued entries in play order.
    #[serde(default, deserialize_with = "lenient::optional_list")]
    pub queue: Option<Vec<RawQueueEntry>>,
}

impl RawQueueResponse {
    /// Creates a response holding `entries`.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = RawQueueEntry>) -> Self {
        Self {
            queue: Some(entries.into_iter().collect()),
        }
    }

    /// Returns the queued entries, empty when absent.
    #[must_use]
    pub fn entries(&self) -> &[RawQueueEntry] {
        self.queue.as_deref().unwrap_or_default()
    }
}

/// One queued track or episode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQueueEntry {
    /// Display name.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name: Option<String>,
    /// Item type, e.g. `track` or `episode`.
    #[serde(default, rename = "type", deserialize_with = "lenient::optional")]
    pub item_type: Option<String>,
    /// Service-side identifier.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub id: Option<String>,
    /// API link to the item.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub href: Option<String>,
    /// Track length in milliseconds.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub duration_ms: Option<u64>,
    /// Album the track belongs to.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub album: Option<RawAlbum>,
    /// Performing artists in credit order.
    #[serde(default, deserialize_with = "lenient::optional_list")]
    pub artists: Option<Vec<RawArtist>>,
}

/// Album fields read from a queue entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAlbum {
    /// Cover images, largest first.
    #[serde(default, deserialize_with = "lenient::optional_list")]
    pub images: Option<Vec<RawImage>>,
}

/// One cover image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawImage {
    /// Image location.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub url: Option<String>,
}

impl RawImage {
    /// Creates an image with a url.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Artist fields read from a queue entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArtist {
    /// Artist name.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name: Option<String>,
    /// Service-side identifier.
    #[serde(default, deserialize_with = "lenient::optional")]
    pub id: Option<String>,
    /// Creator type, normally `artist`.
    #[serde(default, rename = "type", deserialize_with = "lenient::optional")]
    pub artist_type: Option<String>,
}

impl RawArtist {
    /// Creates an artist record with every field set.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        artist_type: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            id: Some(id.into()),
            artist_type: Some(artist_type.into()),
        }
    }
}
