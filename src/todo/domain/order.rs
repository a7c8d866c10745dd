//! Sibling ordering for the flat task list.

use super::RawTask;

/// Keeps top-level tasks and orders them by their sibling position.
///
/// Sub-tasks are dropped because a to-do list has no notion of nesting.
/// Positions are compared as plain strings. The sort is stable, so equal
/// positions keep their input order.
#[must_use]
pub fn order_and_filter_tasks(tasks: impl IntoIterator<Item = RawTask>) -> Vec<RawTask> {
    let mut parents: Vec<RawTask> = tasks.into_iter().filter(RawTask::is_top_level).collect();
    parents.sort_by(|left, right| left.position.cmp(&right.position));
    parents
}
