//! Client port for the streaming service's queue endpoint.

use crate::media_queue::domain::RawQueueResponse;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for queue source calls.
pub type QueueSourceResult<T> = Result<T, QueueSourceError>;

/// Source of the current playback queue.
#[async_trait]
pub trait QueueSource: Send + Sync {
    /// Fetches the queue.
    ///
    /// Returns `Ok(None)` when nothing is playing.
    ///
    /// # Errors
    ///
    /// Returns [`QueueSourceError`] when the upstream call fails.
    async fn queue(&self) -> QueueSourceResult<Option<RawQueueResponse>>;
}

/// Errors returned by queue source clients.
#[derive(Debug, Clone, Error)]
pub enum QueueSourceError {
    /// The account may not read the queue, e.g. a free-tier account.
    #[error("queue access denied: {0}")]
    AccessDenied(String),

    /// Network, authentication or decoding failure.
    #[error("queue source transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl QueueSourceError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
