//! Closed option sets for UI state: pages, view modes, filters and sort keys.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TaskStatus;
use crate::error::TrellisError;

/// Top-level page shown by the client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppPage {
    #[default]
    Dashboard,
    Tasks,
    Goals,
    Docs,
    Calendar,
    Automations,
    Settings,
    Workspaces,
}

impl AppPage {
    pub const ALL: [AppPage; 8] = [
        AppPage::Dashboard,
        AppPage::Tasks,
        AppPage::Goals,
        AppPage::Docs,
        AppPage::Calendar,
        AppPage::Automations,
        AppPage::Settings,
        AppPage::Workspaces,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "dashboard",
            AppPage::Tasks => "tasks",
            AppPage::Goals => "goals",
            AppPage::Docs => "docs",
            AppPage::Calendar => "calendar",
            AppPage::Automations => "automations",
            AppPage::Settings => "settings",
            AppPage::Workspaces => "workspaces",
        }
    }
}

impl FromStr for AppPage {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        AppPage::ALL
            .into_iter()
            .find(|page| page.as_str() == lowered)
            .ok_or_else(|| {
                TrellisError::invalid_input("page").with_reason(format!("Invalid page: {s}"))
            })
    }
}

/// How the task page lays out the derived view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Board,
    Calendar,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Board => "board",
            ViewMode::Calendar => "calendar",
        }
    }
}

impl FromStr for ViewMode {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(ViewMode::List),
            "board" => Ok(ViewMode::Board),
            "calendar" => Ok(ViewMode::Calendar),
            _ => Err(TrellisError::invalid_input("view")
                .with_reason(format!("Invalid view mode: {s}"))),
        }
    }
}

/// Status filter applied to the derived task view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FilterStatus {
    #[default]
    All,
    Todo,
    InProgress,
    Completed,
    Blocked,
}

impl FilterStatus {
    /// The status a task must have to pass the filter, or `None` for `All`.
    pub fn status(&self) -> Option<TaskStatus> {
        match self {
            FilterStatus::All => None,
            FilterStatus::Todo => Some(TaskStatus::Todo),
            FilterStatus::InProgress => Some(TaskStatus::InProgress),
            FilterStatus::Completed => Some(TaskStatus::Completed),
            FilterStatus::Blocked => Some(TaskStatus::Blocked),
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.status().map_or("all", |status| status.as_str())
    }
}

impl From<TaskStatus> for FilterStatus {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Todo => FilterStatus::Todo,
            TaskStatus::InProgress => FilterStatus::InProgress,
            TaskStatus::Completed => FilterStatus::Completed,
            TaskStatus::Blocked => FilterStatus::Blocked,
        }
    }
}

impl FromStr for FilterStatus {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(FilterStatus::All);
        }
        s.parse::<TaskStatus>().map(FilterStatus::from)
    }
}

/// Sort key for the derived task view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Name,
    #[default]
    DueDate,
    Priority,
    Status,
    Assignee,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::DueDate => "dueDate",
            SortBy::Priority => "priority",
            SortBy::Status => "status",
            SortBy::Assignee => "assignee",
        }
    }
}

impl FromStr for SortBy {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "name" => Ok(SortBy::Name),
            "duedate" => Ok(SortBy::DueDate),
            "priority" => Ok(SortBy::Priority),
            "status" => Ok(SortBy::Status),
            "assignee" => Ok(SortBy::Assignee),
            _ => Err(TrellisError::invalid_input("sort")
                .with_reason(format!("Invalid sort key: {s}"))),
        }
    }
}

/// Accent colour for workspaces and projects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Blue,
    Green,
    Purple,
    Red,
    Orange,
    Pink,
    Yellow,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Yellow => "yellow",
        }
    }
}

impl FromStr for Color {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            "purple" => Ok(Color::Purple),
            "red" => Ok(Color::Red),
            "orange" => Ok(Color::Orange),
            "pink" => Ok(Color::Pink),
            "yellow" => Ok(Color::Yellow),
            _ => Err(TrellisError::invalid_input("color")
                .with_reason(format!("Invalid color: {s}"))),
        }
    }
}
