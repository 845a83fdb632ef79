//! The pure state transition function.

use super::{Action, AppState};
use crate::models::{Document, Goal, Task, Workspace};

/// Entities that can be replaced or removed by id.
trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Task {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Goal {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Document {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Workspace {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Replace the element whose id matches `replacement`. Ids are unique within
/// a collection; unknown ids leave it untouched.
fn replace_by_id<T: Keyed>(items: &mut [T], replacement: T) {
    if let Some(slot) = items.iter_mut().find(|item| item.key() == replacement.key()) {
        *slot = replacement;
    }
}

fn remove_by_id<T: Keyed>(items: &mut Vec<T>, id: &str) {
    items.retain(|item| item.key() != id);
}

/// Produce the next state from the current one.
///
/// The reducer takes ownership of the previous snapshot and returns the new
/// one; it reads no clock and performs no I/O. Actions naming an id that is
/// not present change nothing.
///
/// # Examples
///
/// ```rust
/// use trellis_core::store::{reduce, Action, AppState};
/// use trellis_core::models::AppPage;
///
/// let state = reduce(AppState::default(), Action::SetCurrentPage(AppPage::Goals));
/// assert_eq!(state.current_page, AppPage::Goals);
///
/// // Unknown ids are ignored
/// let unchanged = reduce(state.clone(), Action::DeleteGoal("missing".to_string()));
/// assert_eq!(unchanged, state);
/// ```
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::SetCurrentPage(page) => state.current_page = page,

        Action::SetTasks(tasks) => state.tasks = tasks,
        Action::AddTask(task) => state.tasks.push(task),
        Action::UpdateTask(task) => replace_by_id(&mut state.tasks, task),
        Action::DeleteTask(id) => {
            remove_by_id(&mut state.tasks, &id);
            state.selected_tasks.retain(|selected| *selected != id);
        }
        Action::DeleteTasks(ids) => {
            state.tasks.retain(|task| !ids.contains(&task.id));
            state.selected_tasks.clear();
        }

        Action::SetViewMode(mode) => state.view_mode = mode,
        Action::SetFilterStatus(filter) => state.filter_status = filter,
        Action::SetSortBy(sort_by) => state.sort_by = sort_by,
        Action::SetSearchQuery(query) => state.search_query = query,

        Action::ToggleTaskSelection(id) => {
            if state.is_selected(&id) {
                state.selected_tasks.retain(|selected| *selected != id);
            } else {
                state.selected_tasks.push(id);
            }
        }
        Action::SelectAllTasks(select) => {
            state.selected_tasks = if select {
                state.tasks.iter().map(|task| task.id.clone()).collect()
            } else {
                Vec::new()
            };
        }
        Action::ClearSelection => state.selected_tasks.clear(),

        Action::OpenTaskModal(task) => {
            state.is_task_modal_open = true;
            state.editing_task = task;
        }
        Action::CloseTaskModal => {
            state.is_task_modal_open = false;
            state.editing_task = None;
        }

        Action::AddGoal(goal) => state.goals.push(goal),
        Action::UpdateGoal(goal) => replace_by_id(&mut state.goals, goal),
        Action::DeleteGoal(id) => remove_by_id(&mut state.goals, &id),

        Action::AddDocument(doc) => state.documents.push(doc),
        Action::UpdateDocument(doc) => replace_by_id(&mut state.documents, doc),
        Action::DeleteDocument(id) => remove_by_id(&mut state.documents, &id),

        Action::SetAutomations(automations) => state.automations = automations,
        Action::ToggleAutomation(id) => {
            for automation in state.automations.iter_mut().filter(|a| a.id == id) {
                automation.is_active = !automation.is_active;
            }
        }

        Action::AddWorkspace(workspace) => state.workspaces.push(workspace),
        Action::UpdateWorkspace(workspace) => replace_by_id(&mut state.workspaces, workspace),
    }

    state
}
