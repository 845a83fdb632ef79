//! The application state snapshot held by the store.

use serde::{Deserialize, Serialize};

use crate::{
    fixture,
    models::{
        AppPage, Automation, Document, FilterStatus, Goal, Project, SortBy, Task, User,
        ViewMode, Workspace,
    },
    views::TaskQuery,
};

/// Every collection and every piece of UI state the client holds.
///
/// The default state carries the reference users and projects and nothing
/// else; entity collections start empty until a fixture is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub current_page: AppPage,
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub users: Vec<User>,
    pub goals: Vec<Goal>,
    pub documents: Vec<Document>,
    pub automations: Vec<Automation>,
    pub workspaces: Vec<Workspace>,
    pub view_mode: ViewMode,
    pub filter_status: FilterStatus,
    pub sort_by: SortBy,
    pub search_query: String,
    /// Selected task ids in selection order, without duplicates
    pub selected_tasks: Vec<String>,
    pub is_task_modal_open: bool,
    /// Task loaded into the modal for editing; `None` when creating
    pub editing_task: Option<Task>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_page: AppPage::default(),
            tasks: Vec::new(),
            projects: fixture::reference_projects(),
            users: fixture::reference_users(),
            goals: Vec::new(),
            documents: Vec::new(),
            automations: Vec::new(),
            workspaces: Vec::new(),
            view_mode: ViewMode::default(),
            filter_status: FilterStatus::default(),
            sort_by: SortBy::default(),
            search_query: String::new(),
            selected_tasks: Vec::new(),
            is_task_modal_open: false,
            editing_task: None,
        }
    }
}

impl AppState {
    /// The inputs of the derived task view, other than the tasks themselves.
    pub fn task_query(&self) -> TaskQuery<'_> {
        TaskQuery {
            search: &self.search_query,
            status: self.filter_status,
            sort_by: self.sort_by,
        }
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn automation(&self, id: &str) -> Option<&Automation> {
        self.automations.iter().find(|automation| automation.id == id)
    }

    pub fn workspace(&self, id: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|workspace| workspace.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn is_selected(&self, task_id: &str) -> bool {
        self.selected_tasks.iter().any(|id| id == task_id)
    }
}
