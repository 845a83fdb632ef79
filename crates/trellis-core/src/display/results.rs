//! Result wrapper types for displaying operation outcomes.
//!
//! Create, update and delete results share one format per kind of entity;
//! the [`Resource`] trait supplies the kind name and label each message
//! needs.

use std::fmt;

use crate::models::{Document, Goal, Task, Workspace};

/// An entity that operations report on.
pub trait Resource: fmt::Display {
    /// Lowercase kind name used in messages, e.g. `task`.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Short human readable name.
    fn label(&self) -> &str;
}

impl Resource for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Resource for Goal {
    const KIND: &'static str = "goal";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Resource for Document {
    const KIND: &'static str = "document";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Resource for Workspace {
    const KIND: &'static str = "workspace";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use trellis_core::{display::CreateResult, fixture::Fixture};
///
/// let task = Fixture::sample().tasks.remove(1);
/// let output = CreateResult::new(task).to_string();
/// assert!(output.starts_with("Created task with ID: 2\n\n### 2."));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::KIND,
            self.resource.label(),
            self.resource.id()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Fixture;

    #[test]
    fn test_update_result_lists_changes() {
        let goal = Fixture::sample().goals.remove(1);
        let result = UpdateResult::with_changes(goal, vec!["Progress 45 -> 50".to_string()]);
        let output = result.to_string();

        assert!(output.starts_with("Updated goal with ID: 2\n"));
        assert!(output.contains("Changes made:\n- Progress 45 -> 50\n"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let workspace = Fixture::sample().workspaces.remove(1);
        let output = UpdateResult::new(workspace).to_string();
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_delete_result() {
        let doc = Fixture::sample().documents.remove(0);
        let expected = format!("Deleted document '{}' (ID: 1)\n", doc.title);
        assert_eq!(DeleteResult::new(doc).to_string(), expected);
    }
}
