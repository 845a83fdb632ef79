//! The state container: state snapshot, actions, reducer and derived view.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Action      │    │     reduce      │    │  derived view   │
//! │ (UI event)      │───▶│ (AppState →     │───▶│ (search, filter │
//! │                 │    │   AppState)     │    │   and sort)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! [`Store`] owns a single [`AppState`]. Every change goes through
//! [`Store::dispatch`], which hands the snapshot to [`reduce`] and, when the
//! action touched the tasks or the view controls, recomputes the filtered
//! task list from scratch.
//!
//! # Examples
//!
//! ```rust
//! use trellis_core::{
//!     models::FilterStatus,
//!     store::{Action, StoreBuilder},
//! };
//!
//! let mut store = StoreBuilder::new().with_sample_data().build()?;
//! store.dispatch(Action::SetFilterStatus(FilterStatus::Blocked));
//!
//! let blocked = store.filtered_tasks();
//! assert_eq!(blocked.len(), 1);
//! assert_eq!(blocked[0].id, "4");
//! # Ok::<(), trellis_core::TrellisError>(())
//! ```

pub mod action;
pub mod builder;
pub mod reducer;
pub mod state;

#[cfg(test)]
mod tests;

use log::{debug, trace};

pub use action::Action;
pub use builder::StoreBuilder;
pub use reducer::reduce;
pub use state::AppState;

use crate::{models::Task, views::derive_tasks};

/// Exclusive owner of the application state.
#[derive(Debug, Clone)]
pub struct Store {
    state: AppState,
    filtered: Vec<Task>,
}

impl Store {
    /// Wrap an initial state and compute its derived view.
    pub fn new(state: AppState) -> Self {
        let filtered = derive_tasks(&state.tasks, &state.task_query());
        Self { state, filtered }
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) {
        debug!("Dispatching {}", action.name());
        let refresh = action.affects_task_view();

        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, action);

        if refresh {
            self.refresh_view();
        }
    }

    /// Apply several actions in order.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The searched, filtered and sorted task list.
    pub fn filtered_tasks(&self) -> &[Task] {
        &self.filtered
    }

    /// Give up the store, keeping its final state.
    pub fn into_state(self) -> AppState {
        self.state
    }

    fn refresh_view(&mut self) {
        self.filtered = derive_tasks(&self.state.tasks, &self.state.task_query());
        trace!(
            "Derived view recomputed: {} of {} tasks",
            self.filtered.len(),
            self.state.tasks.len()
        );
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
