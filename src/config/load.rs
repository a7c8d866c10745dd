//! Configuration loading and validation.

use super::AdapterConfig;
use std::path::Path;
use thiserror::Error;

const ENV_PREFIX: &str = "DOMICILE";
const ENV_SEPARATOR: &str = "__";

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A scan interval is zero.
    #[error("{0}.scan_interval_secs must be at least 1")]
    ZeroScanInterval(&'static str),

    /// The media content prefix is empty.
    #[error("media.content_prefix must not be empty")]
    EmptyContentPrefix,

    /// The configuration entry id is empty after trimming.
    #[error("config_entry_id must not be empty")]
    EmptyConfigEntryId,
}

impl AdapterConfig {
    /// Loads configuration from an optional TOML file and the environment.
    ///
    /// A missing file is not an error. Environment variables use the
    /// `DOMICILE__` prefix with `__` between nested keys, for example
    /// `DOMICILE__TASKS__SCAN_INTERVAL_SECS=60`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a source is malformed, or a
    /// validation error from [`AdapterConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(file) = path {
            builder = builder.add_source(::config::File::from(file).required(false));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let loaded: Self = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks value ranges that deserialization cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config_entry_id.trim().is_empty() {
            return Err(ConfigError::EmptyConfigEntryId);
        }
        if self.tasks.scan_interval_secs == 0 {
            return Err(ConfigError::ZeroScanInterval("tasks"));
        }
        if self.queue.scan_interval_secs == 0 {
            return Err(ConfigError::ZeroScanInterval("queue"));
        }
        if self.media.content_prefix.is_empty() {
            return Err(ConfigError::EmptyContentPrefix);
        }
        Ok(())
    }
}
