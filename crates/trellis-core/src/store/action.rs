//! The closed set of operations the reducer understands.

use crate::models::{
    AppPage, Automation, Document, FilterStatus, Goal, SortBy, Task, ViewMode, Workspace,
};

/// One state transition, carrying its own typed payload.
///
/// Timestamps and ids inside payloads are assigned by the caller before
/// dispatch; the reducer copies them verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCurrentPage(AppPage),

    /// Replace the whole task collection
    SetTasks(Vec<Task>),
    AddTask(Task),
    /// Replace the task whose id matches the payload
    UpdateTask(Task),
    /// Remove one task and drop it from the selection
    DeleteTask(String),
    /// Remove every listed task and clear the selection
    DeleteTasks(Vec<String>),

    SetViewMode(ViewMode),
    SetFilterStatus(FilterStatus),
    SetSortBy(SortBy),
    SetSearchQuery(String),

    ToggleTaskSelection(String),
    /// `true` selects every task, `false` selects none
    SelectAllTasks(bool),
    ClearSelection,

    /// Open the task modal, optionally pre-loaded with a task to edit
    OpenTaskModal(Option<Task>),
    CloseTaskModal,

    AddGoal(Goal),
    UpdateGoal(Goal),
    DeleteGoal(String),

    AddDocument(Document),
    UpdateDocument(Document),
    DeleteDocument(String),

    /// Replace the whole automation collection
    SetAutomations(Vec<Automation>),
    /// Flip `is_active` on the automation with this id
    ToggleAutomation(String),

    AddWorkspace(Workspace),
    UpdateWorkspace(Workspace),
}

impl Action {
    /// Stable name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetCurrentPage(_) => "SET_CURRENT_PAGE",
            Action::SetTasks(_) => "SET_TASKS",
            Action::AddTask(_) => "ADD_TASK",
            Action::UpdateTask(_) => "UPDATE_TASK",
            Action::DeleteTask(_) => "DELETE_TASK",
            Action::DeleteTasks(_) => "DELETE_TASKS",
            Action::SetViewMode(_) => "SET_VIEW_MODE",
            Action::SetFilterStatus(_) => "SET_FILTER_STATUS",
            Action::SetSortBy(_) => "SET_SORT_BY",
            Action::SetSearchQuery(_) => "SET_SEARCH_QUERY",
            Action::ToggleTaskSelection(_) => "TOGGLE_TASK_SELECTION",
            Action::SelectAllTasks(_) => "SELECT_ALL_TASKS",
            Action::ClearSelection => "CLEAR_SELECTION",
            Action::OpenTaskModal(_) => "OPEN_TASK_MODAL",
            Action::CloseTaskModal => "CLOSE_TASK_MODAL",
            Action::AddGoal(_) => "ADD_GOAL",
            Action::UpdateGoal(_) => "UPDATE_GOAL",
            Action::DeleteGoal(_) => "DELETE_GOAL",
            Action::AddDocument(_) => "ADD_DOCUMENT",
            Action::UpdateDocument(_) => "UPDATE_DOCUMENT",
            Action::DeleteDocument(_) => "DELETE_DOCUMENT",
            Action::SetAutomations(_) => "SET_AUTOMATIONS",
            Action::ToggleAutomation(_) => "TOGGLE_AUTOMATION",
            Action::AddWorkspace(_) => "ADD_WORKSPACE",
            Action::UpdateWorkspace(_) => "UPDATE_WORKSPACE",
        }
    }

    /// Whether this action can change an input of the derived task view:
    /// the task collection, the search query, the status filter or the sort
    /// key.
    pub fn affects_task_view(&self) -> bool {
        matches!(
            self,
            Action::SetTasks(_)
                | Action::AddTask(_)
                | Action::UpdateTask(_)
                | Action::DeleteTask(_)
                | Action::DeleteTasks(_)
                | Action::SetFilterStatus(_)
                | Action::SetSortBy(_)
                | Action::SetSearchQuery(_)
        )
    }

    /// Whether the action removes entities. Interfaces gate these behind a
    /// confirmation before dispatching.
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            Action::DeleteTask(_)
                | Action::DeleteTasks(_)
                | Action::DeleteGoal(_)
                | Action::DeleteDocument(_)
        )
    }
}
