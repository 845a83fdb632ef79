//! Core library for the Trellis project board.
//!
//! This crate holds the application state of a project management board
//! (tasks, goals, documents, automations and workspaces), the reducer that
//! applies actions to it, and the read-side projections the interface shows:
//! the searched, filtered and sorted task list, the kanban board, the month
//! calendar and the dashboard.
//!
//! # Architecture
//!
//! - **State** ([`store`]): a single [`AppState`] owned by a [`Store`]. Every
//!   change is an [`Action`] applied by the pure [`reduce`] function.
//! - **Parameters** ([`params`]): validation, ids and timestamps are the
//!   caller's job; these types build complete action payloads.
//! - **Views** ([`views`]): pure functions of the state, recomputed on demand.
//! - **Display** ([`display`]): markdown `Display` implementations for
//!   terminal rendering.
//! - **Fixtures** ([`fixture`]): the bootstrap data loaded into a new store.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use trellis_core::{params::CreateTask, Action, SortBy, StoreBuilder};
//!
//! let mut store = StoreBuilder::new().with_sample_data().build()?;
//!
//! let task = CreateTask {
//!     name: "Prepare demo".to_string(),
//!     description: None,
//!     status: Default::default(),
//!     priority: Default::default(),
//!     assignee_id: Some("2".to_string()),
//!     due_date: date(2024, 12, 1),
//!     project: "Launch".to_string(),
//! }
//! .build(store.state(), Timestamp::now())?;
//!
//! store.dispatch(Action::AddTask(task));
//! store.dispatch(Action::SetSortBy(SortBy::DueDate));
//!
//! assert_eq!(store.state().tasks.len(), 7);
//! assert_eq!(store.filtered_tasks()[0].name, "Prepare demo");
//! # Ok::<(), trellis_core::TrellisError>(())
//! ```

pub mod display;
pub mod error;
pub mod fixture;
pub mod models;
pub mod params;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use display::{
    Automations, CalendarGrid, CreateResult, DeleteResult, Documents, Goals, LocalDateTime,
    OperationStatus, Projects, Tasks, UpdateResult, Users, Workspaces,
};
pub use error::{Result, TrellisError};
pub use fixture::Fixture;
pub use models::{
    AppPage, Automation, Color, Document, FilterStatus, Goal, GoalStatus, Priority, Project,
    SortBy, Task, TaskStatus, User, ViewMode, Workspace,
};
pub use params::{
    CreateDocument, CreateGoal, CreateTask, CreateWorkspace, EditDocument, EditGoal,
    EditWorkspace, UpdateTask,
};
pub use store::{reduce, Action, AppState, Store, StoreBuilder};
pub use views::{Board, CalendarMonth, DashboardSummary, TaskQuery};
