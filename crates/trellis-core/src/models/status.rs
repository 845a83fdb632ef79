//! Status and priority enumerations for tasks and goals.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrellisError;

/// Type-safe enumeration of task statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has not been started
    #[default]
    Todo,

    /// Task is being worked on
    InProgress,

    /// Task has been finished
    Completed,

    /// Task cannot proceed until something else happens
    Blocked,
}

impl TaskStatus {
    /// Every status, in board column order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Blocked,
    ];

    /// Wire representation, also used as the sort key for status ordering.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Blocked => "blocked",
        }
    }

    /// Human readable column title.
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Blocked => "Blocked",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(TaskStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(TaskStatus::Todo.with_icon(), "○ To Do");
    /// assert_eq!(TaskStatus::Blocked.with_icon(), "✗ Blocked");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "○ To Do",
            TaskStatus::InProgress => "➤ In Progress",
            TaskStatus::Completed => "✓ Completed",
            TaskStatus::Blocked => "✗ Blocked",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" | "inprogress" | "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "blocked" => Ok(TaskStatus::Blocked),
            _ => Err(TrellisError::invalid_input("status")
                .with_reason(format!("Invalid task status: {s}"))),
        }
    }
}

/// Task priority. Declaration order is ascending urgency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Numeric rank used when sorting by priority (high=3, medium=2, low=1).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl FromStr for Priority {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(TrellisError::invalid_input("priority")
                .with_reason(format!("Invalid priority: {s}"))),
        }
    }
}

/// Lifecycle of a goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Goal is being pursued
    #[default]
    Active,

    /// Progress has reached the target
    Completed,

    /// Goal is on hold
    Paused,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
            GoalStatus::Paused => "paused",
        }
    }
}

impl FromStr for GoalStatus {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(GoalStatus::Active),
            "completed" => Ok(GoalStatus::Completed),
            "paused" => Ok(GoalStatus::Paused),
            _ => Err(TrellisError::invalid_input("status")
                .with_reason(format!("Invalid goal status: {s}"))),
        }
    }
}
