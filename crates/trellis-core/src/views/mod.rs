//! Read-side projections over the application state.
//!
//! - [`task_view`]: the searched, filtered and sorted task list
//! - [`board`]: the task list split into status columns
//! - [`calendar`]: month grids and tasks due on a given day
//! - [`dashboard`]: headline counts, recent activity and deadlines
//! - [`documents`]: document search
//! - [`projects`]: live task counts per project
//!
//! Everything here is a pure function of its inputs and recomputes from
//! scratch on every call.

pub mod board;
pub mod calendar;
pub mod dashboard;
pub mod documents;
pub mod projects;
pub mod task_view;

pub use board::{Board, BoardColumn};
pub use calendar::{tasks_due_on, CalendarMonth};
pub use dashboard::DashboardSummary;
pub use documents::search_documents;
pub use projects::{project_task_count, projects_with_counts};
pub use task_view::{derive_tasks, TaskQuery};
