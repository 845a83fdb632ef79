//! Display implementations for domain models.
//!
//! Entities render as markdown sections: a heading carrying the name and
//! status, a metadata list, then free text. Option enums render as their wire
//! names.

use std::fmt;

use super::datetime::{LocalDateTime, MaybeDateTime};
use crate::models::{
    AppPage, Automation, Color, Document, FilterStatus, Goal, GoalStatus, Priority, Project,
    SortBy, Task, TaskStatus, User, ViewMode, Workspace,
};

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    TaskStatus,
    Priority,
    GoalStatus,
    AppPage,
    ViewMode,
    FilterStatus,
    SortBy,
    Color,
);

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** ({}) {} <{}>",
            self.name, self.initials, self.id, self.email
        )
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} **{}** ({}, {} tasks)",
            self.emoji, self.name, self.color, self.task_count
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.name,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Priority: {}", self.priority)?;
        writeln!(f, "- Assignee: {}", self.assignee.name)?;
        writeln!(f, "- Due: {}", self.due_date)?;
        if !self.project.is_empty() {
            writeln!(f, "- Project: {}", self.project)?;
        }
        if self.comment_count > 0 || self.attachment_count > 0 {
            writeln!(
                f,
                "- Comments: {}, Attachments: {}",
                self.comment_count, self.attachment_count
            )?;
        }
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {} ({})", self.id, self.title, self.status)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Progress: {}/{} ({}%)",
            self.progress,
            self.target,
            self.percent()
        )?;
        writeln!(f, "- Due: {}", self.due_date)?;
        if !self.category.is_empty() {
            writeln!(f, "- Category: {}", self.category)?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visibility = if self.is_public { "public" } else { "private" };
        writeln!(f, "## {}. {} ({visibility})", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Author: {}", self.author.name)?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.content.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.content)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Automation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_active { "active" } else { "paused" };
        writeln!(f, "## {}. {} ({state})", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- When: {}", self.trigger)?;
        writeln!(f, "- Then: {}", self.action)?;
        writeln!(f, "- Runs: {}", self.run_count)?;
        writeln!(
            f,
            "- Last run: {}",
            MaybeDateTime(self.last_run.as_ref())
        )?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let default = if self.is_default { " (default)" } else { "" };
        writeln!(
            f,
            "## {} {}. {}{default}",
            self.emoji, self.id, self.name
        )?;
        writeln!(f)?;
        writeln!(f, "- Color: {}", self.color)?;
        let members: Vec<&str> = self.members.iter().map(|m| m.name.as_str()).collect();
        writeln!(f, "- Members: {}", members.join(", "))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Fixture;

    #[test]
    fn test_option_enums_display_wire_names() {
        assert_eq!(TaskStatus::InProgress.to_string(), "in-progress");
        assert_eq!(SortBy::DueDate.to_string(), "dueDate");
        assert_eq!(Priority::High.to_string(), "high");
        assert_eq!(GoalStatus::Paused.to_string(), "paused");
    }

    #[test]
    fn test_task_display() {
        let task = Fixture::sample().tasks.remove(0);
        let output = task.to_string();

        assert!(output.starts_with(&format!("### 1. {} (", task.name)));
        assert!(output.contains(task.status.with_icon()));
        assert!(output.contains(&format!("- Assignee: {}", task.assignee.name)));
        assert!(output.contains(&format!("- Due: {}", task.due_date)));
    }

    #[test]
    fn test_goal_display_shows_percent() {
        let goal = Fixture::sample().goals.remove(0);
        let output = goal.to_string();
        assert!(output.contains("- Progress: 75/100 (75%)"));
        assert!(output.contains("(active)"));
    }

    #[test]
    fn test_document_display_tags() {
        let mut doc = Fixture::sample().documents.remove(0);
        doc.tags = vec!["alpha".to_string(), "beta".to_string()];
        doc.is_public = false;

        let output = doc.to_string();
        assert!(output.contains("- Tags: alpha, beta"));
        assert!(output.contains("(private)"));
    }

    #[test]
    fn test_automation_display_never_run() {
        let mut automation = Fixture::sample().automations.remove(0);
        automation.last_run = None;
        automation.is_active = false;

        let output = automation.to_string();
        assert!(output.contains("- Last run: Never"));
        assert!(output.contains("(paused)"));
    }

    #[test]
    fn test_workspace_display_members() {
        let workspace = Fixture::sample().workspaces.remove(0);
        let output = workspace.to_string();
        assert!(output.contains("(default)"));
        assert!(output.contains("Sarah Chen, Mike Johnson"));
    }
}
