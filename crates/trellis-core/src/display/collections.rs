//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items with their own `Display` implementation and
//! prints a fixed message when the collection is empty. Titles are left to
//! the caller.

use std::{fmt, ops::Index};

use crate::models::{Automation, Document, Goal, Project, Task, User, Workspace};

macro_rules! collection {
    ($(#[$meta:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$meta])*
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Get the number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Get a reference to the item at the given index.
            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            /// Get an iterator over the items.
            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    writeln!(f, $empty)
                } else {
                    for item in &self.0 {
                        write!(f, "{}", item)?;
                    }
                    Ok(())
                }
            }
        }
    };
}

collection!(
    /// Newtype wrapper for displaying a list of tasks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis_core::{display::Tasks, fixture::Fixture};
    ///
    /// let tasks = Tasks(Fixture::sample().tasks);
    /// assert_eq!(tasks.len(), 6);
    /// assert!(tasks.to_string().contains("### 4."));
    ///
    /// assert_eq!(Tasks(vec![]).to_string(), "No tasks found.\n");
    /// ```
    Tasks,
    Task,
    "No tasks found."
);

collection!(
    /// Newtype wrapper for displaying goals.
    Goals,
    Goal,
    "No goals found."
);

collection!(
    /// Newtype wrapper for displaying documents.
    Documents,
    Document,
    "No documents found."
);

collection!(
    /// Newtype wrapper for displaying automations.
    Automations,
    Automation,
    "No automations found."
);

collection!(
    /// Newtype wrapper for displaying workspaces.
    Workspaces,
    Workspace,
    "No workspaces found."
);

collection!(
    /// Newtype wrapper for displaying users as a bullet list.
    Users,
    User,
    "No users found."
);

collection!(
    /// Newtype wrapper for displaying projects as a bullet list.
    Projects,
    Project,
    "No projects found."
);
