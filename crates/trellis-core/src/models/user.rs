//! Reference data: users and projects.

use serde::{Deserialize, Serialize};

use super::Color;

/// A person who can be assigned tasks, author documents and join workspaces.
///
/// Users are reference data; no action mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Two-letter monogram shown when there is no avatar
    pub initials: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Build a user without an avatar, deriving initials from the name.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        let name = name.into();
        let initials = name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect();
        Self {
            id: id.into(),
            name,
            email: email.into(),
            initials,
            avatar: None,
        }
    }
}

/// A named project shown in the sidebar.
///
/// `task_count` is stored as given and is not recomputed from the task
/// collection; [`crate::views::projects_with_counts`] supplies live counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color: Color,
    pub task_count: u32,
}
