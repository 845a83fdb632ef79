//! Goal model definition and progress tracking.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::GoalStatus;

/// A progress-tracked objective with a numeric target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Current progress, kept within `0..=target` by [`Goal::adjust_progress`]
    pub progress: u32,
    pub target: u32,
    pub due_date: Date,
    pub status: GoalStatus,
    pub category: String,
}

impl Goal {
    /// Return a copy of the goal with progress moved by `delta`.
    ///
    /// Progress is clamped to `0..=target`. Reaching the target marks the goal
    /// completed; any other progress leaves it active, so a paused or
    /// completed goal below its target becomes active again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use trellis_core::models::{Goal, GoalStatus};
    ///
    /// let goal = Goal {
    ///     id: "1".to_string(),
    ///     title: "Ship it".to_string(),
    ///     description: String::new(),
    ///     progress: 9,
    ///     target: 10,
    ///     due_date: date(2024, 12, 31),
    ///     status: GoalStatus::Active,
    ///     category: "Product".to_string(),
    /// };
    ///
    /// let done = goal.adjust_progress(5);
    /// assert_eq!(done.progress, 10);
    /// assert_eq!(done.status, GoalStatus::Completed);
    ///
    /// let reopened = done.adjust_progress(-1);
    /// assert_eq!(reopened.progress, 9);
    /// assert_eq!(reopened.status, GoalStatus::Active);
    /// ```
    pub fn adjust_progress(&self, delta: i64) -> Self {
        let progress = i64::from(self.progress)
            .saturating_add(delta)
            .clamp(0, i64::from(self.target));
        // The clamp keeps the value inside u32 range.
        let progress = u32::try_from(progress).unwrap_or(self.target);

        let status = if progress >= self.target {
            GoalStatus::Completed
        } else {
            GoalStatus::Active
        };

        Self {
            progress,
            status,
            ..self.clone()
        }
    }

    /// Progress as a percentage of the target, capped at 100.
    pub fn percent(&self) -> u32 {
        if self.target == 0 {
            return 100;
        }
        let percent = u64::from(self.progress) * 100 / u64::from(self.target);
        percent.min(100) as u32
    }
}
