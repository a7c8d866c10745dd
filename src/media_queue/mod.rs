//! Playback queue formatting for a music-streaming media player.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and the formatter in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
