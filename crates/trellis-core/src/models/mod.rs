//! Data models for the project board.
//!
//! This module contains the entity types owned by the store (tasks, goals,
//! documents, automations, workspaces), the reference data they point at
//! (users, projects) and the closed option sets that make up UI state.
//! Display implementations live in [`crate::display::models`] so the models
//! stay plain data.
//!
//! All entities serialize with camelCase field names, so a JSON fixture reads
//! the same as the data a browser client would hold:
//!
//! ```rust
//! use trellis_core::models::{Task, TaskStatus, Priority};
//!
//! let json = r#"{
//!     "id": "7",
//!     "name": "Draft release notes",
//!     "status": "in-progress",
//!     "priority": "high",
//!     "assignee": {"id": "1", "name": "Sarah Chen", "email": "sarah@example.com", "initials": "SC"},
//!     "dueDate": "2024-12-15",
//!     "project": "Launch",
//!     "comments": 2,
//!     "attachments": 0,
//!     "createdAt": "2024-12-01T00:00:00Z",
//!     "updatedAt": "2024-12-02T00:00:00Z"
//! }"#;
//!
//! let task: Task = serde_json::from_str(json).unwrap();
//! assert_eq!(task.status, TaskStatus::InProgress);
//! assert_eq!(task.priority, Priority::High);
//! assert_eq!(task.comment_count, 2);
//! ```

pub mod automation;
pub mod document;
pub mod goal;
pub mod options;
pub mod status;
pub mod task;
pub mod user;
pub mod workspace;


pub use automation::Automation;
pub use document::Document;
pub use goal::Goal;
pub use options::{AppPage, Color, FilterStatus, SortBy, ViewMode};
pub use status::{GoalStatus, Priority, TaskStatus};
pub use task::Task;
pub use user::{Project, User};
pub use workspace::Workspace;
