//! Adapter configuration.
//!
//! Settings come from struct defaults, an optional TOML file and
//! `DOMICILE__`-prefixed environment variables, later sources winning.

mod load;
mod schema;

pub use load::ConfigError;
pub use schema::{AdapterConfig, MediaConfig, PollingConfig};
