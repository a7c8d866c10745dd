//! Port for the upstream call behind a coordinator.

use async_trait::async_trait;

/// Fetches one complete copy of some upstream data.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Data produced by a successful fetch.
    type Output: Clone + Send + Sync;
    /// Error returned by the upstream call.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Performs the upstream call.
    ///
    /// # Errors
    ///
    /// Returns the upstream failure unchanged.
    async fn fetch(&self) -> Result<Self::Output, Self::Error>;
}
