//! Service exposing the formatted playback queue.

use crate::config::AdapterConfig;
use crate::media_queue::{
    domain::{ContentIdScheme, QueueItem, RawQueueResponse, format_queue},
    ports::{QueueSource, QueueSourceError},
};
use crate::polling::{CachedCoordinator, Coordinator, Fetcher, spawn_polling};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Coordinator caching the raw queue response.
pub type QueueCoordinator =
    dyn Coordinator<Data = Option<RawQueueResponse>, Error = QueueSourceError>;

/// Service-level errors for queue operations.
#[derive(Debug, Error)]
pub enum MediaQueueError {
    /// The queue source call failed.
    #[error(transparent)]
    Source(#[from] QueueSourceError),
}

/// Result type for queue service operations.
pub type MediaQueueResult<T> = Result<T, MediaQueueError>;

/// Adapts a [`QueueSource`] to the generic coordinator.
pub struct QueueFetcher<S>
where
    S: QueueSource,
{
    source: Arc<S>,
}

impl<S> QueueFetcher<S>
where
    S: QueueSource,
{
    /// Creates a fetcher reading from `source`.
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> Fetcher for QueueFetcher<S>
where
    S: QueueSource,
{
    type Output = Option<RawQueueResponse>;
    type Error = QueueSourceError;

    async fn fetch(&self) -> Result<Option<RawQueueResponse>, QueueSourceError> {
        self.source.queue().await
    }
}

/// Read side of a media player's queue.
#[derive(Clone)]
pub struct MediaQueueService {
    coordinator: Arc<QueueCoordinator>,
    content_ids: ContentIdScheme,
    scan_interval: Duration,
}

impl MediaQueueService {
    /// Creates a queue service polling `source`.
    #[must_use]
    pub fn new<S, C>(source: Arc<S>, config: &AdapterConfig, clock: Arc<C>) -> Self
    where
        S: QueueSource + 'static,
        C: Clock + Send + Sync + 'static,
    {
        let coordinator = CachedCoordinator::new("media-queue", QueueFetcher::new(source), clock);
        Self::with_coordinator(Arc::new(coordinator), config)
    }

    /// Creates a queue service on top of an existing coordinator.
    #[must_use]
    pub fn with_coordinator(coordinator: Arc<QueueCoordinator>, config: &AdapterConfig) -> Self {
        Self {
            coordinator,
            content_ids: ContentIdScheme::from(&config.media),
            scan_interval: config.queue.scan_interval(),
        }
    }

    /// Returns the content id scheme of the streaming service.
    #[must_use]
    pub const fn content_ids(&self) -> &ContentIdScheme {
        &self.content_ids
    }

    /// Fetches the queue and returns it formatted.
    ///
    /// # Errors
    ///
    /// Returns [`MediaQueueError::Source`] when the fetch fails; the
    /// previously cached queue is kept.
    pub async fn refresh(&self) -> MediaQueueResult<Vec<QueueItem>> {
        let snapshot = self.coordinator.refresh().await?;
        let items = format_queue(snapshot.data().as_ref());
        tracing::debug!(items = items.len(), "media queue refreshed");
        Ok(items)
    }

    /// Returns the formatted queue from the cached snapshot.
    ///
    /// Empty when nothing was fetched yet or nothing is playing.
    #[must_use]
    pub fn queue(&self) -> Vec<QueueItem> {
        self.coordinator
            .current_snapshot()
            .map(|snapshot| format_queue(snapshot.data().as_ref()))
            .unwrap_or_default()
    }

    /// Starts refreshing the queue at the configured interval.
    #[must_use]
    pub fn start_polling(&self) -> JoinHandle<()> {
        spawn_polling(Arc::clone(&self.coordinator), self.scan_interval)
    }
}
