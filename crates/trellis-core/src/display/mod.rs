//! Display formatting for models, projections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while newtype wrappers handle collections and the outcome of operations.
//! Everything renders as markdown so the CLI can hand it to a terminal
//! renderer unchanged.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   Wrappers &    │    │    Markdown     │
//! │ (Task, Goal, …) │───▶│  Result Types   │───▶│     Output      │
//! │                 │    │                 │    │   (terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Tasks, Goals, Documents, ...)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//! - [`views`]: Display implementations for board, calendar and dashboard
//!
//! ## Usage Examples
//!
//! ```rust
//! use trellis_core::{
//!     display::{CreateResult, OperationStatus},
//!     fixture::Fixture,
//! };
//!
//! let goal = Fixture::sample().goals.remove(0);
//! let output = CreateResult::new(goal).to_string();
//! assert!(output.starts_with("Created goal with ID: 1"));
//!
//! let status = OperationStatus::failure("Deletion requires --confirm");
//! assert_eq!(status.to_string(), "Error: Deletion requires --confirm\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod views;

pub use collections::{Automations, Documents, Goals, Projects, Tasks, Users, Workspaces};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, Resource, UpdateResult};
pub use status::OperationStatus;
pub use views::CalendarGrid;
