//! The derived task view: search, status filter and sort.

use std::cmp::Ordering;

use crate::models::{FilterStatus, SortBy, Task};

/// Inputs of the derived view other than the task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskQuery<'a> {
    /// Case-insensitive substring matched against name, project and assignee
    pub search: &'a str,
    pub status: FilterStatus,
    pub sort_by: SortBy,
}

/// Compute the task list to display.
///
/// 1. Keep tasks whose name, project or assignee name contains the search
///    query, ignoring case. An empty query keeps everything.
/// 2. Keep tasks with the filtered status unless the filter is `All`.
/// 3. Sort by the selected key. The sort is stable, so tasks that compare
///    equal keep their collection order.
///
/// # Examples
///
/// ```rust
/// use trellis_core::{
///     fixture::Fixture,
///     models::SortBy,
///     views::{derive_tasks, TaskQuery},
/// };
///
/// let tasks = Fixture::sample().tasks;
/// let query = TaskQuery { search: "api", sort_by: SortBy::Name, ..Default::default() };
///
/// let view = derive_tasks(&tasks, &query);
/// assert_eq!(view.len(), 1);
/// assert_eq!(view[0].name, "Write API documentation");
/// ```
pub fn derive_tasks(tasks: &[Task], query: &TaskQuery<'_>) -> Vec<Task> {
    let needle = query.search.to_lowercase();
    let wanted = query.status.status();

    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|task| needle.is_empty() || task.matches_lowercase(&needle))
        .filter(|task| wanted.map_or(true, |status| task.status == status))
        .cloned()
        .collect();

    view.sort_by(|a, b| compare(a, b, query.sort_by));
    view
}

/// Ordering of two tasks under a sort key.
pub fn compare(a: &Task, b: &Task, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => compare_text(&a.name, &b.name),
        SortBy::DueDate => a.due_date.cmp(&b.due_date),
        // Highest rank first
        SortBy::Priority => b.priority.rank().cmp(&a.priority.rank()),
        SortBy::Status => a.status.as_str().cmp(b.status.as_str()),
        SortBy::Assignee => compare_text(&a.assignee.name, &b.assignee.name),
    }
}

/// Case-insensitive comparison, falling back to byte order so that strings
/// differing only in case still have a fixed order.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
