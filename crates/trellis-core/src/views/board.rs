//! Board layout: the derived view split into status columns.

use serde::Serialize;

use crate::models::{Task, TaskStatus};

/// One column of the board.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

/// The derived task list laid out as a kanban board.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Board {
    /// Columns in the order todo, in-progress, completed, blocked
    pub columns: Vec<BoardColumn>,
}

impl Board {
    /// Group tasks by status, keeping their relative order inside each
    /// column. Every status gets a column even when it is empty.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let columns = TaskStatus::ALL
            .into_iter()
            .map(|status| BoardColumn {
                status,
                tasks: tasks
                    .iter()
                    .filter(|task| task.status == status)
                    .cloned()
                    .collect(),
            })
            .collect();
        Self { columns }
    }

    pub fn column(&self, status: TaskStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Total number of cards on the board.
    pub fn len(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
