//! Dashboard summary: headline counts, recent activity and deadlines.

use serde::Serialize;

use crate::{
    models::{GoalStatus, Task, TaskStatus},
    store::AppState,
};

/// How many tasks the recent and upcoming lists show.
pub const DASHBOARD_LIST_LEN: usize = 5;

/// Figures shown on the dashboard page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSummary {
    pub total_tasks: usize,
    pub todo_tasks: usize,
    pub in_progress_tasks: usize,
    pub completed_tasks: usize,
    pub blocked_tasks: usize,
    /// Completed share of all tasks as a rounded percentage
    pub completion_rate: u32,
    pub active_goals: usize,
    /// Most recently updated tasks, newest first
    pub recent_tasks: Vec<Task>,
    /// Unfinished tasks with the nearest due dates
    pub upcoming_deadlines: Vec<Task>,
}

impl DashboardSummary {
    /// Summarise the whole task collection; the search and status filter do
    /// not apply here.
    pub fn from_state(state: &AppState) -> Self {
        let tasks = &state.tasks;
        let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();

        let total_tasks = tasks.len();
        let completed_tasks = count(TaskStatus::Completed);

        let mut recent_tasks = tasks.clone();
        recent_tasks.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        recent_tasks.truncate(DASHBOARD_LIST_LEN);

        let mut upcoming_deadlines: Vec<Task> = tasks
            .iter()
            .filter(|task| task.status != TaskStatus::Completed)
            .cloned()
            .collect();
        upcoming_deadlines.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        upcoming_deadlines.truncate(DASHBOARD_LIST_LEN);

        Self {
            total_tasks,
            todo_tasks: count(TaskStatus::Todo),
            in_progress_tasks: count(TaskStatus::InProgress),
            completed_tasks,
            blocked_tasks: count(TaskStatus::Blocked),
            completion_rate: completion_rate(completed_tasks, total_tasks),
            active_goals: state
                .goals
                .iter()
                .filter(|goal| goal.status == GoalStatus::Active)
                .count(),
            recent_tasks,
            upcoming_deadlines,
        }
    }
}

/// `round(completed / total * 100)`, or 0 for an empty collection.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rate = (completed * 100 + total / 2) / total;
    u32::try_from(rate).unwrap_or(100)
}
