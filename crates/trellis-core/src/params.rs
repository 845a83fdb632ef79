//! Parameter structures for building action payloads.
//!
//! The reducer only accepts complete entities, and the caller is responsible
//! for ids, timestamps and validation before dispatch. The types here do that
//! work for every interface (the CLI shell today), so each interface only has
//! to map its own argument types onto them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │     Action      │
//! │  (clap derives) │───▶│ (validate, id,  │───▶│ (full entity    │
//! │                 │    │   timestamps)   │    │    payload)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Creation parameters turn into new entities. Edit parameters carry the id
//! of an existing entity plus the fields to change and produce the
//! full-replacement payload for the matching update action; they return
//! `Ok(None)` when the id is unknown.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrellisError},
    models::{Color, Document, Goal, GoalStatus, Priority, Task, TaskStatus, User, Workspace},
    store::AppState,
};

/// Produce an id that no entity in `taken` uses yet.
///
/// Ids are the creation time in milliseconds, bumped until unique.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use trellis_core::params::fresh_id;
///
/// let now = Timestamp::from_millisecond(1_700_000_000_000)?;
/// assert_eq!(fresh_id(now, ["1", "2"]), "1700000000000");
/// assert_eq!(fresh_id(now, ["1700000000000"]), "1700000000001");
/// # Ok::<(), jiff::Error>(())
/// ```
pub fn fresh_id<'a>(now: Timestamp, taken: impl IntoIterator<Item = &'a str>) -> String {
    let taken: Vec<&str> = taken.into_iter().collect();
    let mut candidate = now.as_millisecond();
    loop {
        let id = candidate.to_string();
        if !taken.contains(&id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}

/// Split a comma-separated tag list: trimmed, empties dropped, duplicates
/// removed keeping the first occurrence.
///
/// # Examples
///
/// ```rust
/// use trellis_core::params::parse_tags;
///
/// assert_eq!(parse_tags(" notes, meeting,,notes "), vec!["notes", "meeting"]);
/// assert!(parse_tags("").is_empty());
/// ```
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrellisError::required(field));
    }
    Ok(())
}

fn require_some(field: &str, value: Option<&String>) -> Result<()> {
    match value {
        Some(value) => require(field, value),
        None => Ok(()),
    }
}

fn validate_target(target: u32) -> Result<()> {
    if target == 0 {
        return Err(TrellisError::invalid_input("target").with_reason("must be greater than zero"));
    }
    Ok(())
}

fn lookup_user(state: &AppState, id: &str) -> Result<User> {
    state.user(id).cloned().ok_or_else(|| {
        TrellisError::invalid_input("assignee").with_reason(format!("no user with id '{id}'"))
    })
}

fn default_user(state: &AppState) -> Result<User> {
    state
        .users
        .first()
        .cloned()
        .ok_or_else(|| TrellisError::invalid_input("users").with_reason("no users available"))
}

/// Parameters for creating a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Name of the task (required)
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    /// Id of the user to assign; defaults to the first user
    pub assignee_id: Option<String>,
    pub due_date: Date,
    #[serde(default)]
    pub project: String,
}

impl CreateTask {
    /// Validate and build the task, assigning a fresh id and stamping both
    /// timestamps with `now`.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - when the name is blank or the
    ///   assignee id does not name a user
    pub fn build(self, state: &AppState, now: Timestamp) -> Result<Task> {
        require("name", &self.name)?;
        let assignee = match &self.assignee_id {
            Some(id) => lookup_user(state, id)?,
            None => default_user(state)?,
        };

        Ok(Task {
            id: fresh_id(now, state.tasks.iter().map(|task| task.id.as_str())),
            name: self.name.trim().to_string(),
            description: self.description.filter(|text| !text.trim().is_empty()),
            status: self.status,
            priority: self.priority,
            assignee,
            due_date: self.due_date,
            project: self.project,
            comment_count: 0,
            attachment_count: 0,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Partial edit of an existing task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// Task id to update (required)
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub assignee_id: Option<String>,
    pub due_date: Option<Date>,
    pub project: Option<String>,
}

impl UpdateTask {
    /// Validate the changes and produce the replacement task, stamped with
    /// `now`. Returns `Ok(None)` when no task has this id.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - when a new name is blank or the
    ///   assignee id does not name a user
    pub fn apply(self, state: &AppState, now: Timestamp) -> Result<Option<Task>> {
        require_some("name", self.name.as_ref())?;
        let Some(current) = state.task(&self.id) else {
            return Ok(None);
        };

        let mut task = current.clone();
        if let Some(name) = self.name {
            task.name = name.trim().to_string();
        }
        if let Some(description) = self.description {
            task.description = Some(description).filter(|text| !text.trim().is_empty());
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assignee_id) = &self.assignee_id {
            task.assignee = lookup_user(state, assignee_id)?;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(project) = self.project {
            task.project = project;
        }
        task.updated_at = now;

        Ok(Some(task))
    }
}

/// Parameters for creating a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGoal {
    /// Title of the goal (required)
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Progress value at which the goal is complete; must be positive
    pub target: u32,
    pub due_date: Date,
    #[serde(default)]
    pub category: String,
}

impl CreateGoal {
    /// Validate and build an active goal with no progress.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - when the title is blank or the target
    ///   is zero
    pub fn build(self, state: &AppState, now: Timestamp) -> Result<Goal> {
        require("title", &self.title)?;
        validate_target(self.target)?;

        Ok(Goal {
            id: fresh_id(now, state.goals.iter().map(|goal| goal.id.as_str())),
            title: self.title.trim().to_string(),
            description: self.description,
            progress: 0,
            target: self.target,
            due_date: self.due_date,
            status: GoalStatus::Active,
            category: self.category,
        })
    }
}

/// Partial edit of an existing goal. Progress and status are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditGoal {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub target: Option<u32>,
    pub due_date: Option<Date>,
    pub category: Option<String>,
}

impl EditGoal {
    /// Produce the replacement goal. Returns `Ok(None)` when no goal has this
    /// id.
    ///
    /// A new target re-applies the progress rules, so progress above the new
    /// target is clamped and the goal completes.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - when a new title is blank or a new
    ///   target is zero
    pub fn apply(self, state: &AppState) -> Result<Option<Goal>> {
        require_some("title", self.title.as_ref())?;
        if let Some(target) = self.target {
            validate_target(target)?;
        }
        let Some(current) = state.goal(&self.id) else {
            return Ok(None);
        };

        let mut goal = current.clone();
        if let Some(title) = self.title {
            goal.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            goal.description = description;
        }
        if let Some(due_date) = self.due_date {
            goal.due_date = due_date;
        }
        if let Some(category) = self.category {
            goal.category = category;
        }
        if let Some(target) = self.target {
            goal.target = target;
            goal = goal.adjust_progress(0);
        }

        Ok(Some(goal))
    }
}

/// Move a goal's progress by `delta`. Returns `None` when no goal has this id.
pub fn adjust_goal_progress(state: &AppState, id: &str, delta: i64) -> Option<Goal> {
    state.goal(id).map(|goal| goal.adjust_progress(delta))
}

/// Parameters for creating a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Title of the document (required)
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Comma-separated tags
    #[serde(default)]
    pub tags: String,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

fn default_public() -> bool {
    true
}

impl CreateDocument {
    /// Validate and build the document. The first user is the author.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - when the title is blank or there are
    ///   no users to author it
    pub fn build(self, state: &AppState, now: Timestamp) -> Result<Document> {
        require("title", &self.title)?;

        Ok(Document {
            id: fresh_id(now, state.documents.iter().map(|doc| doc.id.as_str())),
            title: self.title.trim().to_string(),
            content: self.content,
            author: default_user(state)?,
            created_at: now,
            updated_at: now,
            tags: parse_tags(&self.tags),
            is_public: self.is_public,
        })
    }
}

/// Partial edit of an existing document. Author and creation time are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditDocument {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Comma-separated tags replacing the current ones
    pub tags: Option<String>,
    pub is_public: Option<bool>,
}

impl EditDocument {
    /// Produce the replacement document, stamped with `now`. Returns
    /// `Ok(None)` when no document has this id.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - when a new title is blank
    pub fn apply(self, state: &AppState, now: Timestamp) -> Result<Option<Document>> {
        require_some("title", self.title.as_ref())?;
        let Some(current) = state.document(&self.id) else {
            return Ok(None);
        };

        let mut doc = current.clone();
        if let Some(title) = self.title {
            doc.title = title.trim().to_string();
        }
        if let Some(content) = self.content {
            doc.content = content;
        }
        if let Some(tags) = self.tags {
            doc.tags = parse_tags(&tags);
        }
        if let Some(is_public) = self.is_public {
            doc.is_public = is_public;
        }
        doc.updated_at = now;

        Ok(Some(doc))
    }
}

/// Parameters for creating a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkspace {
    /// Name of the workspace (required)
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_emoji")]
    pub emoji: String,
    #[serde(default)]
    pub color: Color,
}

fn default_emoji() -> String {
    "🚀".to_string()
}

impl CreateWorkspace {
    /// Validate and build a non-default workspace whose only member is the
    /// first user.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - when the name is blank or there are no
    ///   users
    pub fn build(self, state: &AppState, now: Timestamp) -> Result<Workspace> {
        require("name", &self.name)?;

        Ok(Workspace {
            id: fresh_id(now, state.workspaces.iter().map(|ws| ws.id.as_str())),
            name: self.name.trim().to_string(),
            description: self.description,
            emoji: self.emoji,
            color: self.color,
            members: vec![default_user(state)?],
            created_at: now,
            is_default: false,
        })
    }
}

/// Partial edit of an existing workspace. Members, creation time and the
/// default flag are kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditWorkspace {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub emoji: Option<String>,
    pub color: Option<Color>,
}

impl EditWorkspace {
    /// Produce the replacement workspace. Returns `Ok(None)` when no
    /// workspace has this id.
    ///
    /// # Errors
    ///
    /// * `TrellisError::InvalidInput` - when a new name is blank
    pub fn apply(self, state: &AppState) -> Result<Option<Workspace>> {
        require_some("name", self.name.as_ref())?;
        let Some(current) = state.workspace(&self.id) else {
            return Ok(None);
        };

        let mut workspace = current.clone();
        if let Some(name) = self.name {
            workspace.name = name.trim().to_string();
        }
        if let Some(description) = self.description {
            workspace.description = description;
        }
        if let Some(emoji) = self.emoji {
            workspace.emoji = emoji;
        }
        if let Some(color) = self.color {
            workspace.color = color;
        }

        Ok(Some(workspace))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::store::StoreBuilder;

    fn now() -> Timestamp {
        Timestamp::from_second(1_735_689_600).unwrap() // 2025-01-01 00:00:00 UTC
    }

    fn sample_state() -> AppState {
        StoreBuilder::new()
            .with_sample_data()
            .build()
            .unwrap()
            .into_state()
    }

    fn create_task(name: &str) -> CreateTask {
        CreateTask {
            name: name.to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: Priority::High,
            assignee_id: None,
            due_date: date(2025, 1, 10),
            project: "Launch".to_string(),
        }
    }

    #[test]
    fn test_create_task_stamps_and_assigns() {
        let state = sample_state();
        let task = create_task("  Ship it ").build(&state, now()).unwrap();

        assert_eq!(task.name, "Ship it");
        assert_eq!(task.id, "1735689600000");
        assert_eq!(task.created_at, now());
        assert_eq!(task.updated_at, now());
        assert_eq!(task.assignee.name, "Sarah Chen");
        assert_eq!(task.comment_count, 0);
    }

    #[test]
    fn test_create_task_requires_name() {
        let state = sample_state();
        let err = create_task("   ").build(&state, now()).unwrap_err();
        assert!(matches!(err, TrellisError::InvalidInput { ref field, .. } if field == "name"));
    }

    #[test]
    fn test_create_task_rejects_unknown_assignee() {
        let state = sample_state();
        let mut params = create_task("Ship it");
        params.assignee_id = Some("99".to_string());
        let err = params.build(&state, now()).unwrap_err();
        assert!(matches!(err, TrellisError::InvalidInput { ref field, .. } if field == "assignee"));
    }

    #[test]
    fn test_update_task_changes_only_given_fields() {
        let state = sample_state();
        let params = UpdateTask {
            id: "2".to_string(),
            status: Some(TaskStatus::InProgress),
            assignee_id: Some("6".to_string()),
            ..Default::default()
        };
        let task = params.apply(&state, now()).unwrap().unwrap();

        let before = state.task("2").unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.assignee.name, "Lisa Wang");
        assert_eq!(task.name, before.name);
        assert_eq!(task.created_at, before.created_at);
        assert_eq!(task.updated_at, now());
    }

    #[test]
    fn test_update_unknown_task_is_none() {
        let state = sample_state();
        let params = UpdateTask {
            id: "missing".to_string(),
            ..Default::default()
        };
        assert!(params.apply(&state, now()).unwrap().is_none());
    }

    #[test]
    fn test_create_goal_validation() {
        let state = sample_state();
        let params = CreateGoal {
            title: "Grow".to_string(),
            description: String::new(),
            target: 0,
            due_date: date(2025, 3, 1),
            category: "Team".to_string(),
        };
        assert!(params.clone().build(&state, now()).is_err());

        let goal = CreateGoal { target: 10, ..params }.build(&state, now()).unwrap();
        assert_eq!(goal.progress, 0);
        assert_eq!(goal.status, GoalStatus::Active);
    }

    #[test]
    fn test_edit_goal_keeps_progress_and_clamps_to_new_target() {
        let state = sample_state();
        let goal = EditGoal {
            id: "1".to_string(),
            title: Some("Launch".to_string()),
            ..Default::default()
        }
        .apply(&state)
        .unwrap()
        .unwrap();
        assert_eq!(goal.progress, 75);
        assert_eq!(goal.status, GoalStatus::Active);

        let lowered = EditGoal {
            id: "1".to_string(),
            target: Some(50),
            ..Default::default()
        }
        .apply(&state)
        .unwrap()
        .unwrap();
        assert_eq!(lowered.progress, 50);
        assert_eq!(lowered.status, GoalStatus::Completed);
    }

    #[test]
    fn test_adjust_goal_progress_unknown_id() {
        let state = sample_state();
        assert!(adjust_goal_progress(&state, "missing", 1).is_none());
        assert_eq!(adjust_goal_progress(&state, "2", 5).unwrap().progress, 50);
    }

    #[test]
    fn test_create_document_parses_tags() {
        let state = sample_state();
        let doc = CreateDocument {
            title: "Roadmap".to_string(),
            content: "Q1".to_string(),
            tags: "planning, q1, planning".to_string(),
            is_public: false,
        }
        .build(&state, now())
        .unwrap();

        assert_eq!(doc.tags, vec!["planning", "q1"]);
        assert_eq!(doc.author.id, "1");
        assert!(!doc.is_public);
    }

    #[test]
    fn test_edit_document_keeps_author_and_created() {
        let state = sample_state();
        let doc = EditDocument {
            id: "2".to_string(),
            tags: Some("retro".to_string()),
            ..Default::default()
        }
        .apply(&state, now())
        .unwrap()
        .unwrap();

        let before = state.document("2").unwrap();
        assert_eq!(doc.tags, vec!["retro"]);
        assert_eq!(doc.author, before.author);
        assert_eq!(doc.created_at, before.created_at);
        assert_eq!(doc.updated_at, now());
    }

    #[test]
    fn test_create_and_edit_workspace() {
        let state = sample_state();
        let workspace = CreateWorkspace {
            name: "Design".to_string(),
            description: String::new(),
            emoji: "🎨".to_string(),
            color: Color::Pink,
        }
        .build(&state, now())
        .unwrap();
        assert_eq!(workspace.members.len(), 1);
        assert!(!workspace.is_default);

        let edited = EditWorkspace {
            id: "1".to_string(),
            color: Some(Color::Red),
            ..Default::default()
        }
        .apply(&state)
        .unwrap()
        .unwrap();
        assert_eq!(edited.color, Color::Red);
        assert_eq!(edited.members.len(), 4);
        assert!(edited.is_default);
    }

    #[test]
    fn test_fresh_id_skips_taken() {
        let taken = ["1735689600000", "1735689600001"];
        assert_eq!(fresh_id(now(), taken), "1735689600002");
    }
}
