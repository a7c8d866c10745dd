//! Configuration schema and defaults.

use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_ENTRY_ID: &str = "default";
const DEFAULT_TASKS_SCAN_INTERVAL_SECS: u64 = 15 * 60;
const DEFAULT_QUEUE_SCAN_INTERVAL_SECS: u64 = 30;
const DEFAULT_CONTENT_PREFIX: &str = "spotify://";

/// Top-level adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Configuration entry id used as the prefix of list unique ids.
    pub config_entry_id: String,
    /// Polling of task lists.
    pub tasks: PollingConfig,
    /// Polling of the playback queue.
    pub queue: PollingConfig,
    /// Media content id handling.
    pub media: MediaConfig,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            config_entry_id: DEFAULT_CONFIG_ENTRY_ID.to_owned(),
            tasks: PollingConfig::tasks(),
            queue: PollingConfig::queue(),
            media: MediaConfig::default(),
        }
    }
}

/// Polling cadence of one coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PollingConfig {
    /// Seconds between scheduled refreshes.
    pub scan_interval_secs: u64,
}

impl PollingConfig {
    /// Default cadence for task lists.
    #[must_use]
    pub const fn tasks() -> Self {
        Self {
            scan_interval_secs: DEFAULT_TASKS_SCAN_INTERVAL_SECS,
        }
    }

    /// Default cadence for the playback queue.
    #[must_use]
    pub const fn queue() -> Self {
        Self {
            scan_interval_secs: DEFAULT_QUEUE_SCAN_INTERVAL_SECS,
        }
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub const fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_secs)
    }
}

/// Media content id settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Prefix marking media browser content ids owned by the streaming
    /// service.
    pub content_prefix: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            content_prefix: DEFAULT_CONTENT_PREFIX.to_owned(),
        }
    }
}
