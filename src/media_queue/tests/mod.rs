//! Unit tests for the playback queue context.
