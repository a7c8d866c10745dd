//! In-memory queue source for tests and local runs.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::media_queue::{
    domain::RawQueueResponse,
    ports::{QueueSource, QueueSourceError, QueueSourceResult},
};

/// Queue source returning whatever response was last set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQueueSource {
    response: Arc<RwLock<Option<RawQueueResponse>>>,
}

impl InMemoryQueueSource {
    /// Creates a source with nothing playing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the response returned by subsequent fetches.
    ///
    /// # Errors
    ///
    /// Returns [`QueueSourceError::Transport`] if the lock is poisoned.
    pub fn set_response(&self, response: Option<RawQueueResponse>) -> QueueSourceResult<()> {
        let mut current = self
            .response
            .write()
            .map_err(|err| QueueSourceError::transport(std::io::Error::other(err.to_string())))?;
        *current = response;
        Ok(())
    }
}

#[async_trait]
impl QueueSource for InMemoryQueueSource {
    async fn queue(&self) -> QueueSourceResult<Option<RawQueueResponse>> {
        let current = self
            .response
            .read()
            .map_err(|err| QueueSourceError::transport(std::io::Error::other(err.to_string())))?;
        Ok(current.clone())
    }
}
