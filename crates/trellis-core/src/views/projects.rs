//! Live task counts for the sidebar projects.

use crate::{models::Project, store::AppState};

/// Number of tasks whose project name equals `project` exactly.
///
/// # Examples
///
/// ```rust
/// use trellis_core::{views::project_task_count, StoreBuilder};
///
/// let store = StoreBuilder::new().with_sample_data().build()?;
/// assert_eq!(project_task_count(store.state(), "DevOps"), 1);
/// assert_eq!(project_task_count(store.state(), "devops"), 0);
/// # Ok::<(), trellis_core::TrellisError>(())
/// ```
pub fn project_task_count(state: &AppState, project: &str) -> usize {
    state
        .tasks
        .iter()
        .filter(|task| task.project == project)
        .count()
}

/// The reference projects with `task_count` replaced by the live count.
///
/// The stored projects are left as they are.
pub fn projects_with_counts(state: &AppState) -> Vec<Project> {
    state
        .projects
        .iter()
        .map(|project| Project {
            task_count: u32::try_from(project_task_count(state, &project.name))
                .unwrap_or(u32::MAX),
            ..project.clone()
        })
        .collect()
}
