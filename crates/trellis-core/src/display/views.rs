//! Display implementations for the board, calendar and dashboard
//! projections.

use std::fmt;

use crate::{
    models::Task,
    views::{calendar::tasks_due_on, Board, CalendarMonth, DashboardSummary},
};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in &self.columns {
            writeln!(
                f,
                "## {} ({})",
                column.status.with_icon(),
                column.tasks.len()
            )?;
            writeln!(f)?;
            if column.tasks.is_empty() {
                writeln!(f, "No tasks.")?;
            }
            for task in &column.tasks {
                writeln!(
                    f,
                    "- {}. **{}** ({}, {}, due {})",
                    task.id, task.name, task.priority, task.assignee.initials, task.due_date
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A month grid annotated with the tasks due on each day.
///
/// Days with due tasks show the task count next to the day number; the
/// tasks themselves are listed below the grid.
///
/// # Examples
///
/// ```rust
/// use trellis_core::{display::CalendarGrid, fixture::Fixture, views::CalendarMonth};
///
/// let tasks = Fixture::sample().tasks;
/// let month = CalendarMonth::new(2024, 12)?;
/// let output = CalendarGrid::new(month, &tasks).to_string();
///
/// assert!(output.starts_with("# December 2024"));
/// assert!(output.contains("| 15 (1) |"));
/// # Ok::<(), trellis_core::TrellisError>(())
/// ```
pub struct CalendarGrid<'a> {
    pub month: CalendarMonth,
    pub tasks: &'a [Task],
}

impl<'a> CalendarGrid<'a> {
    pub fn new(month: CalendarMonth, tasks: &'a [Task]) -> Self {
        Self { month, tasks }
    }
}

impl<'a> fmt::Display for CalendarGrid<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.month.title())?;
        writeln!(f)?;
        writeln!(f, "| Sun | Mon | Tue | Wed | Thu | Fri | Sat |")?;
        writeln!(f, "|---|---|---|---|---|---|---|")?;

        let cells = self.month.days();
        for week in cells.chunks(7) {
            write!(f, "|")?;
            for cell in week {
                match cell {
                    Some(day) => match tasks_due_on(self.tasks, *day).len() {
                        0 => write!(f, " {} |", day.day())?,
                        due => write!(f, " {} ({due}) |", day.day())?,
                    },
                    None => write!(f, "   |")?,
                }
            }
            for _ in week.len()..7 {
                write!(f, "   |")?;
            }
            writeln!(f)?;
        }

        let mut due: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| self.month.contains(task.due_date))
            .collect();
        due.sort_by_key(|task| task.due_date);

        writeln!(f)?;
        if due.is_empty() {
            writeln!(f, "No tasks due this month.")?;
        }
        for task in due {
            writeln!(
                f,
                "- {}: {}. {} ({})",
                task.due_date,
                task.id,
                task.name,
                task.status.with_icon()
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for DashboardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Dashboard")?;
        writeln!(f)?;
        writeln!(f, "- Total tasks: {}", self.total_tasks)?;
        writeln!(f, "- To do: {}", self.todo_tasks)?;
        writeln!(f, "- In progress: {}", self.in_progress_tasks)?;
        writeln!(f, "- Completed: {}", self.completed_tasks)?;
        writeln!(f, "- Blocked: {}", self.blocked_tasks)?;
        writeln!(f, "- Completion rate: {}%", self.completion_rate)?;
        writeln!(f, "- Active goals: {}", self.active_goals)?;

        writeln!(f)?;
        writeln!(f, "## Recent Tasks")?;
        writeln!(f)?;
        if self.recent_tasks.is_empty() {
            writeln!(f, "No tasks found.")?;
        }
        for task in &self.recent_tasks {
            writeln!(
                f,
                "- {}. {} ({})",
                task.id,
                task.name,
                task.status.with_icon()
            )?;
        }

        writeln!(f)?;
        writeln!(f, "## Upcoming Deadlines")?;
        writeln!(f)?;
        if self.upcoming_deadlines.is_empty() {
            writeln!(f, "No upcoming deadlines.")?;
        }
        for task in &self.upcoming_deadlines {
            writeln!(
                f,
                "- {}: {}. {} ({})",
                task.due_date, task.id, task.name, task.assignee.name
            )?;
        }

        Ok(())
    }
}
