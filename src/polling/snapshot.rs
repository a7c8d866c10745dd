//! Timestamped copy of upstream data.

use chrono::{DateTime, Utc};

/// Data captured by one successful refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    data: T,
    fetched_at: DateTime<Utc>,
}

impl<T> Snapshot<T> {
    /// Wraps freshly fetched data.
    #[must_use]
    pub const fn new(data: T, fetched_at: DateTime<Utc>) -> Self {
        Self { data, fetched_at }
    }

    /// Returns the captured data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the snapshot and returns its data.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }

    /// Returns when the data was fetched.
    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}
