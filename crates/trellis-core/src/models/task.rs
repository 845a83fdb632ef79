//! Task model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{Priority, TaskStatus, User};

/// A unit of work tracked through a status and priority lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task
    pub id: String,

    /// Short name shown in lists and cards
    pub name: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub status: TaskStatus,

    pub priority: Priority,

    /// Embedded copy of the assigned user
    pub assignee: User,

    pub due_date: Date,

    /// Free-text project name; not a reference into the project list
    pub project: String,

    /// Number of comments on the task
    #[serde(default, rename = "comments")]
    pub comment_count: u32,

    /// Number of files attached to the task
    #[serde(default, rename = "attachments")]
    pub attachment_count: u32,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}

impl Task {
    /// Case-insensitive substring match against name, project and assignee.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.project.to_lowercase().contains(needle)
            || self.assignee.name.to_lowercase().contains(needle)
    }
}
