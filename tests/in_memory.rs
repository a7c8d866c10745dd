//! In-memory adapter integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `todo_list_tests`: Discovery, reads and mutations of task-backed lists
//! - `media_queue_tests`: Queue decoding, formatting and caching

mod in_memory {
    pub mod helpers;

    mod media_queue_tests;
    mod todo_list_tests;
}
