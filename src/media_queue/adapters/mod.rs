//! Adapter implementations for playback queue ports.

pub mod memory;
