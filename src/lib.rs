//! Domicile: integration adapters for a smart-home automation platform.
//!
//! Each adapter translates between the vocabulary of an external web API and
//! the host platform's generic entity abstractions.
//!
//! # Architecture
//!
//! Domicile follows hexagonal architecture principles:
//!
//! - **Domain**: Pure translation logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the upstream API clients
//! - **Adapters**: Concrete implementations of ports (in-memory for now)
//!
//! # Modules
//!
//! - [`todo`]: Cloud task lists exposed as to-do lists
//! - [`media_queue`]: Playback queue formatting for a media player
//! - [`polling`]: Generic poll-and-cache coordinator shared by both
//! - [`config`]: Adapter configuration

pub mod config;
pub mod media_queue;
pub mod polling;
pub mod todo;
