//! Snapshot cache in front of a [`Fetcher`].

use super::{Fetcher, Snapshot};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Poll-and-cache contract consumed by the list and queue services.
#[async_trait]
pub trait Coordinator: Send + Sync {
    /// Cached data type.
    type Data: Clone + Send + Sync;
    /// Error returned when a refresh fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetches fresh data and replaces the cached snapshot.
    ///
    /// # Errors
    ///
    /// Returns the upstream error; the previous snapshot is kept.
    async fn refresh(&self) -> Result<Snapshot<Self::Data>, Self::Error>;

    /// Returns the cached snapshot, or `None` if nothing was fetched yet.
    fn current_snapshot(&self) -> Option<Snapshot<Self::Data>>;

    /// Returns the name used to attribute log output.
    fn name(&self) -> &str;
}

/// In-process coordinator holding the latest snapshot behind a lock.
pub struct CachedCoordinator<F, C>
where
    F: Fetcher,
    C: Clock + Send + Sync,
{
    name: String,
    fetcher: F,
    clock: Arc<C>,
    snapshot: RwLock<Option<Snapshot<F::Output>>>,
}

impl<F, C> CachedCoordinator<F, C>
where
    F: Fetcher,
    C: Clock + Send + Sync,
{
    /// Creates a coordinator with no snapshot.
    ///
    /// `name` identifies the coordinator in log output.
    #[must_use]
    pub fn new(name: impl Into<String>, fetcher: F, clock: Arc<C>) -> Self {
        Self {
            name: name.into(),
            fetcher,
            clock,
            snapshot: RwLock::new(None),
        }
    }

    /// Returns the wrapped fetcher.
    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

#[async_trait]
impl<F, C> Coordinator for CachedCoordinator<F, C>
where
    F: Fetcher,
    C: Clock + Send + Sync,
{
    type Data = F::Output;
    type Error = F::Error;

    async fn refresh(&self) -> Result<Snapshot<F::Output>, F::Error> {
        let data = self.fetcher.fetch().await?;
        let snapshot = Snapshot::new(data, self.clock.utc());
        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(snapshot.clone());
        tracing::debug!(
            coordinator = %self.name,
            fetched_at = %snapshot.fetched_at(),
            "snapshot refreshed"
        );
        Ok(snapshot)
    }

    fn current_snapshot(&self) -> Option<Snapshot<F::Output>> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Refreshes `coordinator` every `period` until the handle is aborted.
///
/// The first refresh runs immediately. Failures are logged and polling
/// continues on the next tick.
pub fn spawn_polling<K>(coordinator: Arc<K>, period: Duration) -> JoinHandle<()>
where
    K: Coordinator + ?Sized + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(err) = coordinator.refresh().await {
                tracing::warn!(
                    coordinator = %coordinator.name(),
                    error = %err,
                    "scheduled refresh failed"
                );
            }
        }
    })
}
