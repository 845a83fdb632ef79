//! Command-line argument definitions using clap
//!
//! Clap derives stay in this crate; the core parameter types know nothing
//! about argument parsing. Every argument struct converts into its core
//! counterpart:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Action → Store
//! ```
//!
//! The value enums at the bottom mirror the core option sets so that clap can
//! list the accepted values in `--help`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use trellis_core::{
    params::{
        CreateDocument, CreateGoal, CreateTask, CreateWorkspace, EditDocument, EditGoal,
        EditWorkspace, UpdateTask,
    },
    Action, AppPage, CalendarMonth, Color, FilterStatus, Priority, SortBy, TaskStatus, ViewMode,
};

// ============================================================================
// Read commands
// ============================================================================

/// Show the task list
///
/// Options given here update the search query, status filter, sort key and
/// view mode before the list is shown. Options left out keep their current
/// values.
#[derive(Args, Debug, Default)]
pub struct ListTasksArgs {
    /// Case-insensitive text matched against task, project and assignee names
    #[arg(long)]
    pub search: Option<String>,
    /// Only show tasks with this status
    #[arg(short, long)]
    pub status: Option<FilterArg>,
    /// Sort key for the list
    #[arg(long)]
    pub sort: Option<SortArg>,
    /// Layout of the list
    #[arg(short, long)]
    pub view: Option<ViewArg>,
    /// Month to show in the calendar view, as YYYY-MM (defaults to the
    /// current month)
    #[arg(short, long)]
    pub month: Option<CalendarMonth>,
}

impl ListTasksArgs {
    /// Actions applying the given view options, in dispatch order.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(search) = &self.search {
            actions.push(Action::SetSearchQuery(search.clone()));
        }
        if let Some(status) = self.status {
            actions.push(Action::SetFilterStatus(status.into()));
        }
        if let Some(sort) = self.sort {
            actions.push(Action::SetSortBy(sort.into()));
        }
        if let Some(view) = self.view {
            actions.push(Action::SetViewMode(view.into()));
        }
        actions
    }
}

/// Show documents, optionally filtered by a search term
#[derive(Args, Debug, Default)]
pub struct ListDocsArgs {
    /// Case-insensitive text matched against title, content and tags
    #[arg(long)]
    pub search: Option<String>,
}

// ============================================================================
// Shell commands
// ============================================================================

/// One line of input in an interactive session.
#[derive(Parser, Debug)]
#[command(name = "trellis", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommands,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommands {
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage goals
    #[command(alias = "g")]
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Manage documents
    #[command(alias = "d")]
    Doc {
        #[command(subcommand)]
        command: DocCommands,
    },
    /// Manage workspaces
    #[command(alias = "w")]
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommands,
    },
    /// Manage automations
    #[command(alias = "a")]
    Automation {
        #[command(subcommand)]
        command: AutomationCommands,
    },
    /// Toggle a task in the selection
    Select {
        /// ID of the task to select or deselect
        id: String,
    },
    /// Select every task
    SelectAll,
    /// Empty the selection
    #[command(alias = "select-none")]
    ClearSelection,
    /// Set the search query; no argument clears it
    Search {
        /// Text to search for
        query: Option<String>,
    },
    /// Set the status filter
    Filter {
        /// Status to show, or `all`
        status: FilterArg,
    },
    /// Set the sort key
    Sort {
        /// Field to sort by
        key: SortArg,
    },
    /// Set the task layout
    View {
        /// Layout to use
        mode: ViewArg,
    },
    /// Navigate to a page
    Page {
        /// Page to show
        page: PageArg,
    },
    /// Open or close the task editor
    Modal {
        #[command(subcommand)]
        command: ModalCommands,
    },
    /// Show the task list
    #[command(alias = "ls")]
    Tasks(ListTasksArgs),
    /// Show the dashboard
    Dashboard,
    /// Show goals
    Goals,
    /// Show documents
    Docs(ListDocsArgs),
    /// Show automations
    Automations,
    /// Show workspaces
    Workspaces,
    /// Show projects
    Projects,
    /// Show users
    Users,
    /// Show the current page, view settings and selection
    Status,
}

// ============================================================================
// Tasks
// ============================================================================

/// Create a new task
#[derive(Args, Debug)]
pub struct AddTaskArgs {
    /// Name of the task
    pub name: String,
    /// Optional description of the work
    #[arg(short, long)]
    pub description: Option<String>,
    /// Initial status
    #[arg(short, long, value_enum, default_value_t = TaskStatusArg::Todo)]
    pub status: TaskStatusArg,
    /// Priority of the task
    #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
    pub priority: PriorityArg,
    /// ID of the assigned user (defaults to the first user)
    #[arg(short, long)]
    pub assignee: Option<String>,
    /// Due date as YYYY-MM-DD
    #[arg(long)]
    pub due: Date,
    /// Project name
    #[arg(long, default_value = "")]
    pub project: String,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            name: val.name,
            description: val.description,
            status: val.status.into(),
            priority: val.priority.into(),
            assignee_id: val.assignee,
            due_date: val.due,
            project: val.project,
        }
    }
}

/// Change a task's details
#[derive(Args, Debug)]
pub struct EditTaskArgs {
    /// ID of the task to edit
    pub id: String,
    /// New name
    #[arg(short, long)]
    pub name: Option<String>,
    /// New description
    #[arg(short, long)]
    pub description: Option<String>,
    /// New status
    #[arg(short, long)]
    pub status: Option<TaskStatusArg>,
    /// New priority
    #[arg(short, long)]
    pub priority: Option<PriorityArg>,
    /// ID of the new assignee
    #[arg(short, long)]
    pub assignee: Option<String>,
    /// New due date as YYYY-MM-DD
    #[arg(long)]
    pub due: Option<Date>,
    /// New project name
    #[arg(long)]
    pub project: Option<String>,
}

impl From<EditTaskArgs> for UpdateTask {
    fn from(val: EditTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            name: val.name,
            description: val.description,
            status: val.status.map(Into::into),
            priority: val.priority.map(Into::into),
            assignee_id: val.assignee,
            due_date: val.due,
            project: val.project,
        }
    }
}

/// Move a task to another status
#[derive(Args, Debug)]
pub struct MoveTaskArgs {
    /// ID of the task to move
    pub id: String,
    /// Target status
    pub status: TaskStatusArg,
}

impl From<MoveTaskArgs> for UpdateTask {
    fn from(val: MoveTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            status: Some(val.status.into()),
            ..Default::default()
        }
    }
}

/// Delete an entity permanently
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// ID of the entity to delete
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Delete every selected task
#[derive(Args, Debug)]
pub struct DeleteSelectedArgs {
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Show one entity
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// ID of the entity to show
    pub id: String,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Create a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Change a task's details
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Move a task to another status
    #[command(alias = "mv")]
    Move(MoveTaskArgs),
    /// Show a task
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Delete a task permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// Delete every selected task
    DeleteSelected(DeleteSelectedArgs),
}

// ============================================================================
// Goals
// ============================================================================

/// Create a new goal
#[derive(Args, Debug)]
pub struct AddGoalArgs {
    /// Title of the goal
    pub title: String,
    /// Progress value at which the goal is complete
    #[arg(long)]
    pub target: u32,
    /// Due date as YYYY-MM-DD
    #[arg(long)]
    pub due: Date,
    /// Optional description of the goal
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Category label
    #[arg(short, long, default_value = "")]
    pub category: String,
}

impl From<AddGoalArgs> for CreateGoal {
    fn from(val: AddGoalArgs) -> Self {
        CreateGoal {
            title: val.title,
            description: val.description,
            target: val.target,
            due_date: val.due,
            category: val.category,
        }
    }
}

/// Change a goal's details; progress and status are kept
#[derive(Args, Debug)]
pub struct EditGoalArgs {
    /// ID of the goal to edit
    pub id: String,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(long)]
    pub target: Option<u32>,
    /// New due date as YYYY-MM-DD
    #[arg(long)]
    pub due: Option<Date>,
    #[arg(short, long)]
    pub category: Option<String>,
}

impl From<EditGoalArgs> for EditGoal {
    fn from(val: EditGoalArgs) -> Self {
        EditGoal {
            id: val.id,
            title: val.title,
            description: val.description,
            target: val.target,
            due_date: val.due,
            category: val.category,
        }
    }
}

/// Move a goal's progress up or down
#[derive(Args, Debug)]
pub struct GoalProgressArgs {
    /// ID of the goal
    pub id: String,
    /// Amount to add; negative values reduce progress
    #[arg(allow_negative_numbers = true)]
    pub delta: i64,
}

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Create a new goal
    #[command(alias = "a")]
    Add(AddGoalArgs),
    /// Change a goal's details
    #[command(alias = "e")]
    Edit(EditGoalArgs),
    /// Move a goal's progress
    #[command(alias = "p")]
    Progress(GoalProgressArgs),
    /// Delete a goal permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

// ============================================================================
// Documents
// ============================================================================

/// Create a new document
#[derive(Args, Debug)]
pub struct AddDocArgs {
    /// Title of the document
    pub title: String,
    /// Body text
    #[arg(short, long, default_value = "")]
    pub content: String,
    /// Comma-separated tags
    #[arg(short, long, default_value = "")]
    pub tags: String,
    /// Hide the document from people outside the workspace
    #[arg(long)]
    pub private: bool,
}

impl From<AddDocArgs> for CreateDocument {
    fn from(val: AddDocArgs) -> Self {
        CreateDocument {
            title: val.title,
            content: val.content,
            tags: val.tags,
            is_public: !val.private,
        }
    }
}

/// Change a document; author and creation time are kept
#[derive(Args, Debug)]
pub struct EditDocArgs {
    /// ID of the document to edit
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub content: Option<String>,
    /// Comma-separated tags replacing the current ones
    #[arg(short, long)]
    pub tags: Option<String>,
    /// Whether the document is public
    #[arg(long)]
    pub public: Option<bool>,
}

impl From<EditDocArgs> for EditDocument {
    fn from(val: EditDocArgs) -> Self {
        EditDocument {
            id: val.id,
            title: val.title,
            content: val.content,
            tags: val.tags,
            is_public: val.public,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum DocCommands {
    /// Create a new document
    #[command(alias = "a")]
    Add(AddDocArgs),
    /// Change a document
    #[command(alias = "e")]
    Edit(EditDocArgs),
    /// Show a document
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Delete a document permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

// ============================================================================
// Workspaces and automations
// ============================================================================

/// Create a new workspace
#[derive(Args, Debug)]
pub struct AddWorkspaceArgs {
    /// Name of the workspace
    pub name: String,
    #[arg(short, long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "🚀")]
    pub emoji: String,
    #[arg(long, value_enum, default_value_t = ColorArg::Blue)]
    pub color: ColorArg,
}

impl From<AddWorkspaceArgs> for CreateWorkspace {
    fn from(val: AddWorkspaceArgs) -> Self {
        CreateWorkspace {
            name: val.name,
            description: val.description,
            emoji: val.emoji,
            color: val.color.into(),
        }
    }
}

/// Change a workspace; members and the default flag are kept
#[derive(Args, Debug)]
pub struct EditWorkspaceArgs {
    /// ID of the workspace to edit
    pub id: String,
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(long)]
    pub emoji: Option<String>,
    #[arg(long)]
    pub color: Option<ColorArg>,
}

impl From<EditWorkspaceArgs> for EditWorkspace {
    fn from(val: EditWorkspaceArgs) -> Self {
        EditWorkspace {
            id: val.id,
            name: val.name,
            description: val.description,
            emoji: val.emoji,
            color: val.color.map(Into::into),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum WorkspaceCommands {
    /// Create a new workspace
    #[command(alias = "a")]
    Add(AddWorkspaceArgs),
    /// Change a workspace
    #[command(alias = "e")]
    Edit(EditWorkspaceArgs),
}

#[derive(Subcommand, Debug)]
pub enum AutomationCommands {
    /// Switch an automation on or off
    Toggle(ShowArgs),
}

#[derive(Subcommand, Debug)]
pub enum ModalCommands {
    /// Open the editor, for a new task or the given one
    Open {
        /// ID of the task to edit
        id: Option<String>,
    },
    /// Close the editor
    Close,
}

// ============================================================================
// Value enums
// ============================================================================

/// Command-line representation of task statuses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TaskStatusArg {
    Todo,
    #[value(alias = "inprogress")]
    InProgress,
    Completed,
    Blocked,
}

impl From<TaskStatusArg> for TaskStatus {
    fn from(val: TaskStatusArg) -> Self {
        match val {
            TaskStatusArg::Todo => TaskStatus::Todo,
            TaskStatusArg::InProgress => TaskStatus::InProgress,
            TaskStatusArg::Completed => TaskStatus::Completed,
            TaskStatusArg::Blocked => TaskStatus::Blocked,
        }
    }
}

/// Command-line representation of the status filter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Todo,
    #[value(alias = "inprogress")]
    InProgress,
    Completed,
    Blocked,
}

impl From<FilterArg> for FilterStatus {
    fn from(val: FilterArg) -> Self {
        match val {
            FilterArg::All => FilterStatus::All,
            FilterArg::Todo => FilterStatus::Todo,
            FilterArg::InProgress => FilterStatus::InProgress,
            FilterArg::Completed => FilterStatus::Completed,
            FilterArg::Blocked => FilterStatus::Blocked,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(val: PriorityArg) -> Self {
        match val {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Name,
    #[value(aliases = ["due", "dueDate"])]
    DueDate,
    Priority,
    Status,
    Assignee,
}

impl From<SortArg> for SortBy {
    fn from(val: SortArg) -> Self {
        match val {
            SortArg::Name => SortBy::Name,
            SortArg::DueDate => SortBy::DueDate,
            SortArg::Priority => SortBy::Priority,
            SortArg::Status => SortBy::Status,
            SortArg::Assignee => SortBy::Assignee,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    List,
    Board,
    Calendar,
}

impl From<ViewArg> for ViewMode {
    fn from(val: ViewArg) -> Self {
        match val {
            ViewArg::List => ViewMode::List,
            ViewArg::Board => ViewMode::Board,
            ViewArg::Calendar => ViewMode::Calendar,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Blue,
    Green,
    Purple,
    Red,
    Orange,
    Pink,
    Yellow,
}

impl From<ColorArg> for Color {
    fn from(val: ColorArg) -> Self {
        match val {
            ColorArg::Blue => Color::Blue,
            ColorArg::Green => Color::Green,
            ColorArg::Purple => Color::Purple,
            ColorArg::Red => Color::Red,
            ColorArg::Orange => Color::Orange,
            ColorArg::Pink => Color::Pink,
            ColorArg::Yellow => Color::Yellow,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageArg {
    Dashboard,
    Tasks,
    Goals,
    Docs,
    Calendar,
    Automations,
    Settings,
    Workspaces,
}

impl From<PageArg> for AppPage {
    fn from(val: PageArg) -> Self {
        match val {
            PageArg::Dashboard => AppPage::Dashboard,
            PageArg::Tasks => AppPage::Tasks,
            PageArg::Goals => AppPage::Goals,
            PageArg::Docs => AppPage::Docs,
            PageArg::Calendar => AppPage::Calendar,
            PageArg::Automations => AppPage::Automations,
            PageArg::Settings => AppPage::Settings,
            PageArg::Workspaces => AppPage::Workspaces,
        }
    }
}
