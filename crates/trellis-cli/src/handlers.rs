//! Command handlers.
//!
//! [`Cli`] owns the store for the lifetime of the process and turns parsed
//! commands into dispatched actions. Every handler returns the markdown to
//! show, leaving rendering to the caller.

use anyhow::{anyhow, Result};
use jiff::{Timestamp, Zoned};
use log::{debug, info};
use trellis_core::{
    display::{
        Automations, CalendarGrid, CreateResult, DeleteResult, Documents, Goals, OperationStatus,
        Projects, Tasks, UpdateResult, Users, Workspaces,
    },
    params::{
        adjust_goal_progress, CreateDocument, CreateGoal, CreateTask, CreateWorkspace,
        EditDocument, EditGoal, EditWorkspace, UpdateTask,
    },
    views::{projects_with_counts, search_documents},
    Action, Board, CalendarMonth, DashboardSummary, Store, Task, ViewMode,
};

use crate::cli::{
    AutomationCommands, DocCommands, GoalCommands, ListDocsArgs, ListTasksArgs, ModalCommands,
    ShellCommands, TaskCommands, WorkspaceCommands,
};

pub struct Cli {
    store: Store,
}

impl Cli {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Apply the given view options and show the task list in the current
    /// layout.
    pub fn list_tasks(&mut self, args: ListTasksArgs) -> String {
        self.store.dispatch_all(args.actions());

        let state = self.store.state();
        let tasks = self.store.filtered_tasks();
        let mut out = format!("# Tasks ({} of {})\n\n", tasks.len(), state.tasks.len());

        let mut settings = Vec::new();
        if !state.search_query.is_empty() {
            settings.push(format!("Search: '{}'", state.search_query));
        }
        settings.push(format!("Filter: {}", state.filter_status));
        settings.push(format!("Sort: {}", state.sort_by));
        out.push_str(&format!("{}\n\n", settings.join(", ")));

        match state.view_mode {
            ViewMode::List => out.push_str(&Tasks(tasks.to_vec()).to_string()),
            ViewMode::Board => out.push_str(&Board::from_tasks(tasks).to_string()),
            ViewMode::Calendar => {
                let month = args
                    .month
                    .unwrap_or_else(|| CalendarMonth::containing(Zoned::now().date()));
                out.push_str(&CalendarGrid::new(month, tasks).to_string());
            }
        }
        out
    }

    pub fn dashboard(&self) -> String {
        DashboardSummary::from_state(self.store.state()).to_string()
    }

    pub fn goals(&self) -> String {
        format!("# Goals\n\n{}", Goals(self.store.state().goals.clone()))
    }

    pub fn docs(&self, args: &ListDocsArgs) -> String {
        let all = &self.store.state().documents;
        let found: Vec<_> = match &args.search {
            Some(query) => search_documents(all, query).into_iter().cloned().collect(),
            None => all.clone(),
        };
        format!("# Documents\n\n{}", Documents(found))
    }

    pub fn automations(&self) -> String {
        format!(
            "# Automations\n\n{}",
            Automations(self.store.state().automations.clone())
        )
    }

    pub fn workspaces(&self) -> String {
        format!(
            "# Workspaces\n\n{}",
            Workspaces(self.store.state().workspaces.clone())
        )
    }

    /// Projects with the number of tasks currently filed under each.
    pub fn projects(&self) -> String {
        format!(
            "# Projects\n\n{}",
            Projects(projects_with_counts(self.store.state()))
        )
    }

    pub fn users(&self) -> String {
        format!("# Users\n\n{}", Users(self.store.state().users.clone()))
    }

    /// Page, view settings, selection and editor state.
    pub fn status(&self) -> String {
        let state = self.store.state();
        let mut out = String::from("# Status\n\n");
        out.push_str(&format!("- Page: {}\n", state.current_page));
        out.push_str(&format!("- View: {}\n", state.view_mode));
        out.push_str(&format!("- Filter: {}\n", state.filter_status));
        out.push_str(&format!("- Sort: {}\n", state.sort_by));
        out.push_str(&format!("- Search: '{}'\n", state.search_query));
        if state.selected_tasks.is_empty() {
            out.push_str("- Selected: none\n");
        } else {
            out.push_str(&format!("- Selected: {}\n", state.selected_tasks.join(", ")));
        }
        let editor = match (state.is_task_modal_open, &state.editing_task) {
            (false, _) => "closed".to_string(),
            (true, None) => "new task".to_string(),
            (true, Some(task)) => format!("editing '{}'", task.name),
        };
        out.push_str(&format!("- Task editor: {editor}\n"));
        out
    }

    /// Run one shell command stamped with `now`.
    ///
    /// Validation failures and unknown ids are errors; the session reports
    /// them and carries on.
    pub fn execute(&mut self, command: ShellCommands, now: Timestamp) -> Result<String> {
        debug!("Executing {command:?}");
        match command {
            ShellCommands::Task { command } => self.handle_task_command(command, now),
            ShellCommands::Goal { command } => self.handle_goal_command(command, now),
            ShellCommands::Doc { command } => self.handle_doc_command(command, now),
            ShellCommands::Workspace { command } => self.handle_workspace_command(command, now),
            ShellCommands::Automation { command } => self.handle_automation_command(command),

            ShellCommands::Select { id } => {
                if self.store.state().task(&id).is_none() {
                    return Err(anyhow!("Task with ID {id} not found"));
                }
                self.store.dispatch(Action::ToggleTaskSelection(id.clone()));
                let verb = if self.store.state().is_selected(&id) {
                    "Selected"
                } else {
                    "Deselected"
                };
                Ok(OperationStatus::success(format!("{verb} task {id}")).to_string())
            }
            ShellCommands::SelectAll => {
                self.store.dispatch(Action::SelectAllTasks(true));
                let count = self.store.state().selected_tasks.len();
                Ok(OperationStatus::success(format!("Selected {count} tasks")).to_string())
            }
            ShellCommands::ClearSelection => {
                self.store.dispatch(Action::ClearSelection);
                Ok(OperationStatus::success("Selection cleared").to_string())
            }

            ShellCommands::Search { query } => {
                let query = query.unwrap_or_default();
                self.store.dispatch(Action::SetSearchQuery(query));
                Ok(self.list_tasks(ListTasksArgs::default()))
            }
            ShellCommands::Filter { status } => {
                self.store.dispatch(Action::SetFilterStatus(status.into()));
                Ok(self.list_tasks(ListTasksArgs::default()))
            }
            ShellCommands::Sort { key } => {
                self.store.dispatch(Action::SetSortBy(key.into()));
                Ok(self.list_tasks(ListTasksArgs::default()))
            }
            ShellCommands::View { mode } => {
                self.store.dispatch(Action::SetViewMode(mode.into()));
                Ok(self.list_tasks(ListTasksArgs::default()))
            }
            ShellCommands::Page { page } => {
                self.store.dispatch(Action::SetCurrentPage(page.into()));
                let page = self.store.state().current_page;
                Ok(OperationStatus::success(format!("Showing {page}")).to_string())
            }
            ShellCommands::Modal { command } => self.handle_modal_command(command),

            ShellCommands::Tasks(args) => Ok(self.list_tasks(args)),
            ShellCommands::Dashboard => Ok(self.dashboard()),
            ShellCommands::Goals => Ok(self.goals()),
            ShellCommands::Docs(args) => Ok(self.docs(&args)),
            ShellCommands::Automations => Ok(self.automations()),
            ShellCommands::Workspaces => Ok(self.workspaces()),
            ShellCommands::Projects => Ok(self.projects()),
            ShellCommands::Users => Ok(self.users()),
            ShellCommands::Status => Ok(self.status()),
        }
    }

    fn handle_task_command(&mut self, command: TaskCommands, now: Timestamp) -> Result<String> {
        match command {
            TaskCommands::Add(args) => {
                let task = CreateTask::from(args).build(self.store.state(), now)?;
                self.store.dispatch(Action::AddTask(task.clone()));
                info!("Created task {}", task.id);
                Ok(CreateResult::new(task).to_string())
            }
            TaskCommands::Edit(args) => self.update_task(args.into(), now),
            TaskCommands::Move(args) => self.update_task(args.into(), now),
            TaskCommands::Show(args) => {
                let task = self
                    .store
                    .state()
                    .task(&args.id)
                    .ok_or_else(|| anyhow!("Task with ID {} not found", args.id))?;
                Ok(task.to_string())
            }
            TaskCommands::Delete(args) => {
                let task = self
                    .store
                    .state()
                    .task(&args.id)
                    .cloned()
                    .ok_or_else(|| anyhow!("Task with ID {} not found", args.id))?;
                let result = DeleteResult::new(task).to_string();
                Ok(self.guarded(Action::DeleteTask(args.id), args.confirm, result))
            }
            TaskCommands::DeleteSelected(args) => {
                let selected = self.store.state().selected_tasks.clone();
                if selected.is_empty() {
                    return Err(anyhow!("No tasks are selected"));
                }
                let result = OperationStatus::success(format!(
                    "Deleted {} selected tasks: {}",
                    selected.len(),
                    selected.join(", ")
                ))
                .to_string();
                Ok(self.guarded(Action::DeleteTasks(selected), args.confirm, result))
            }
        }
    }

    fn update_task(&mut self, params: UpdateTask, now: Timestamp) -> Result<String> {
        let id = params.id.clone();
        let before = self
            .store
            .state()
            .task(&id)
            .cloned()
            .ok_or_else(|| anyhow!("Task with ID {id} not found"))?;
        let task = params
            .apply(self.store.state(), now)?
            .ok_or_else(|| anyhow!("Task with ID {id} not found"))?;

        let changes = task_changes(&before, &task);
        self.store.dispatch(Action::UpdateTask(task.clone()));
        Ok(UpdateResult::with_changes(task, changes).to_string())
    }

    fn handle_goal_command(&mut self, command: GoalCommands, now: Timestamp) -> Result<String> {
        match command {
            GoalCommands::Add(args) => {
                let goal = CreateGoal::from(args).build(self.store.state(), now)?;
                self.store.dispatch(Action::AddGoal(goal.clone()));
                Ok(CreateResult::new(goal).to_string())
            }
            GoalCommands::Edit(args) => {
                let id = args.id.clone();
                let goal = EditGoal::from(args)
                    .apply(self.store.state())?
                    .ok_or_else(|| anyhow!("Goal with ID {id} not found"))?;
                self.store.dispatch(Action::UpdateGoal(goal.clone()));
                Ok(UpdateResult::new(goal).to_string())
            }
            GoalCommands::Progress(args) => {
                let before = self
                    .store
                    .state()
                    .goal(&args.id)
                    .map(|goal| goal.progress)
                    .ok_or_else(|| anyhow!("Goal with ID {} not found", args.id))?;
                let goal = adjust_goal_progress(self.store.state(), &args.id, args.delta)
                    .ok_or_else(|| anyhow!("Goal with ID {} not found", args.id))?;
                let change = format!("Progress: {before} -> {}", goal.progress);
                self.store.dispatch(Action::UpdateGoal(goal.clone()));
                Ok(UpdateResult::with_changes(goal, vec![change]).to_string())
            }
            GoalCommands::Delete(args) => {
                let goal = self
                    .store
                    .state()
                    .goal(&args.id)
                    .cloned()
                    .ok_or_else(|| anyhow!("Goal with ID {} not found", args.id))?;
                let result = DeleteResult::new(goal).to_string();
                Ok(self.guarded(Action::DeleteGoal(args.id), args.confirm, result))
            }
        }
    }

    fn handle_doc_command(&mut self, command: DocCommands, now: Timestamp) -> Result<String> {
        match command {
            DocCommands::Add(args) => {
                let doc = CreateDocument::from(args).build(self.store.state(), now)?;
                self.store.dispatch(Action::AddDocument(doc.clone()));
                Ok(CreateResult::new(doc).to_string())
            }
            DocCommands::Edit(args) => {
                let id = args.id.clone();
                let doc = EditDocument::from(args)
                    .apply(self.store.state(), now)?
                    .ok_or_else(|| anyhow!("Document with ID {id} not found"))?;
                self.store.dispatch(Action::UpdateDocument(doc.clone()));
                Ok(UpdateResult::new(doc).to_string())
            }
            DocCommands::Show(args) => {
                let doc = self
                    .store
                    .state()
                    .document(&args.id)
                    .ok_or_else(|| anyhow!("Document with ID {} not found", args.id))?;
                Ok(doc.to_string())
            }
            DocCommands::Delete(args) => {
                let doc = self
                    .store
                    .state()
                    .document(&args.id)
                    .cloned()
                    .ok_or_else(|| anyhow!("Document with ID {} not found", args.id))?;
                let result = DeleteResult::new(doc).to_string();
                Ok(self.guarded(Action::DeleteDocument(args.id), args.confirm, result))
            }
        }
    }

    fn handle_workspace_command(
        &mut self,
        command: WorkspaceCommands,
        now: Timestamp,
    ) -> Result<String> {
        match command {
            WorkspaceCommands::Add(args) => {
                let workspace = CreateWorkspace::from(args).build(self.store.state(), now)?;
                self.store.dispatch(Action::AddWorkspace(workspace.clone()));
                Ok(CreateResult::new(workspace).to_string())
            }
            WorkspaceCommands::Edit(args) => {
                let id = args.id.clone();
                let workspace = EditWorkspace::from(args)
                    .apply(self.store.state())?
                    .ok_or_else(|| anyhow!("Workspace with ID {id} not found"))?;
                self.store.dispatch(Action::UpdateWorkspace(workspace.clone()));
                Ok(UpdateResult::new(workspace).to_string())
            }
        }
    }

    fn handle_automation_command(&mut self, command: AutomationCommands) -> Result<String> {
        match command {
            AutomationCommands::Toggle(args) => {
                if self.store.state().automation(&args.id).is_none() {
                    return Err(anyhow!("Automation with ID {} not found", args.id));
                }
                self.store.dispatch(Action::ToggleAutomation(args.id.clone()));
                let automation = self
                    .store
                    .state()
                    .automation(&args.id)
                    .ok_or_else(|| anyhow!("Automation with ID {} not found", args.id))?;
                let state = if automation.is_active {
                    "Activated"
                } else {
                    "Paused"
                };
                Ok(
                    OperationStatus::success(format!("{state} automation '{}'", automation.name))
                        .to_string(),
                )
            }
        }
    }

    fn handle_modal_command(&mut self, command: ModalCommands) -> Result<String> {
        match command {
            ModalCommands::Open { id: None } => {
                self.store.dispatch(Action::OpenTaskModal(None));
                Ok(OperationStatus::success("Task editor opened for a new task").to_string())
            }
            ModalCommands::Open { id: Some(id) } => {
                let task = self
                    .store
                    .state()
                    .task(&id)
                    .cloned()
                    .ok_or_else(|| anyhow!("Task with ID {id} not found"))?;
                let message = format!("Task editor opened for '{}'", task.name);
                self.store.dispatch(Action::OpenTaskModal(Some(task)));
                Ok(OperationStatus::success(message).to_string())
            }
            ModalCommands::Close => {
                self.store.dispatch(Action::CloseTaskModal);
                Ok(OperationStatus::success("Task editor closed").to_string())
            }
        }
    }

    /// Dispatch a destructive action only when confirmed; otherwise report
    /// what would have happened.
    fn guarded(&mut self, action: Action, confirmed: bool, done: String) -> String {
        if action.is_destructive() && !confirmed {
            info!("{} not confirmed, nothing dispatched", action.name());
            return OperationStatus::failure(
                "This deletion cannot be undone. Repeat the command with --confirm to proceed.",
            )
            .to_string();
        }
        self.store.dispatch(action);
        done
    }
}

/// Human readable list of the fields that differ between two versions of a
/// task.
fn task_changes(before: &Task, after: &Task) -> Vec<String> {
    let mut changes = Vec::new();
    if before.name != after.name {
        changes.push(format!("Name: '{}' -> '{}'", before.name, after.name));
    }
    if before.description != after.description {
        changes.push("Description updated".to_string());
    }
    if before.status != after.status {
        changes.push(format!("Status: {} -> {}", before.status, after.status));
    }
    if before.priority != after.priority {
        changes.push(format!("Priority: {} -> {}", before.priority, after.priority));
    }
    if before.assignee.id != after.assignee.id {
        changes.push(format!(
            "Assignee: {} -> {}",
            before.assignee.name, after.assignee.name
        ));
    }
    if before.due_date != after.due_date {
        changes.push(format!("Due: {} -> {}", before.due_date, after.due_date));
    }
    if before.project != after.project {
        changes.push(format!("Project: '{}' -> '{}'", before.project, after.project));
    }
    changes
}
