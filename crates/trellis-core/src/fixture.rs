//! Bootstrap data for a fresh store.
//!
//! A [`Fixture`] is the data set loaded once at startup. The built-in
//! [`Fixture::sample`] reproduces the demonstration board; a JSON file with
//! the same shape can replace it.

use std::{collections::HashSet, path::Path};

use jiff::{
    civil::{date, Date},
    tz::TimeZone,
    Timestamp,
};
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrellisError},
    models::{
        Automation, Color, Document, Goal, GoalStatus, Priority, Project, Task, TaskStatus, User,
        Workspace,
    },
    store::{Action, Store},
};

/// Entity collections to seed a store with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub automations: Vec<Automation>,
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
}

impl Fixture {
    /// Read a fixture from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `TrellisError::FileSystem` if the file cannot be read,
    /// `TrellisError::Serialization` if its contents are not a fixture and
    /// `TrellisError::InvalidInput` if a collection repeats an id.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TrellisError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let fixture: Self = serde_json::from_str(&text)?;
        fixture.validate()?;
        info!("Loaded fixture from {}", path.display());
        Ok(fixture)
    }

    /// Check that ids are unique within each collection.
    ///
    /// # Errors
    ///
    /// Returns `TrellisError::InvalidInput` naming the collection and the
    /// first repeated id.
    pub fn validate(&self) -> Result<()> {
        unique_ids("tasks", self.tasks.iter().map(|t| t.id.as_str()))?;
        unique_ids("goals", self.goals.iter().map(|g| g.id.as_str()))?;
        unique_ids("documents", self.documents.iter().map(|d| d.id.as_str()))?;
        unique_ids("automations", self.automations.iter().map(|a| a.id.as_str()))?;
        unique_ids("workspaces", self.workspaces.iter().map(|w| w.id.as_str()))
    }

    /// Seed a store by dispatching the fixture through the reducer.
    pub fn load_into(self, store: &mut Store) {
        info!(
            "Seeding {} tasks, {} goals, {} documents, {} automations, {} workspaces",
            self.tasks.len(),
            self.goals.len(),
            self.documents.len(),
            self.automations.len(),
            self.workspaces.len()
        );

        store.dispatch(Action::SetTasks(self.tasks));
        store.dispatch_all(self.goals.into_iter().map(Action::AddGoal));
        store.dispatch_all(self.documents.into_iter().map(Action::AddDocument));
        store.dispatch(Action::SetAutomations(self.automations));
        store.dispatch_all(self.workspaces.into_iter().map(Action::AddWorkspace));
    }

    /// The demonstration board: six tasks, two goals, two documents, two
    /// automations and two workspaces.
    pub fn sample() -> Self {
        let users = reference_users();
        let user = |index: usize| users[index].clone();

        let tasks = vec![
            sample_task(
                "1",
                "Design new landing page hero section",
                "Create a compelling hero section that showcases our product value proposition",
                TaskStatus::InProgress,
                Priority::High,
                user(0),
                date(2024, 12, 15),
                "Website Redesign",
                (3, 2),
                (date(2024, 12, 1), date(2024, 12, 10)),
            ),
            sample_task(
                "2",
                "Implement user authentication flow",
                "Build secure login and registration system with JWT tokens",
                TaskStatus::Todo,
                Priority::Medium,
                user(1),
                date(2024, 12, 18),
                "Auth System",
                (1, 0),
                (date(2024, 12, 2), date(2024, 12, 2)),
            ),
            sample_task(
                "3",
                "Write API documentation",
                "Document all REST endpoints with examples and response schemas",
                TaskStatus::Completed,
                Priority::Low,
                user(2),
                date(2024, 12, 12),
                "Documentation",
                (5, 1),
                (date(2024, 11, 28), date(2024, 12, 12)),
            ),
            sample_task(
                "4",
                "Set up CI/CD pipeline",
                "Configure automated testing and deployment workflows",
                TaskStatus::Blocked,
                Priority::High,
                user(3),
                date(2024, 12, 20),
                "DevOps",
                (2, 3),
                (date(2024, 12, 3), date(2024, 12, 8)),
            ),
            sample_task(
                "5",
                "Conduct user research interviews",
                "Interview 10 users to understand pain points and feature requests",
                TaskStatus::InProgress,
                Priority::Medium,
                user(4),
                date(2024, 12, 16),
                "User Research",
                (0, 0),
                (date(2024, 12, 4), date(2024, 12, 9)),
            ),
            sample_task(
                "6",
                "Optimize database queries",
                "Improve performance of slow queries and add proper indexing",
                TaskStatus::Todo,
                Priority::High,
                user(5),
                date(2024, 12, 22),
                "Performance",
                (1, 0),
                (date(2024, 12, 5), date(2024, 12, 5)),
            ),
        ];

        let goals = vec![
            Goal {
                id: "1".to_string(),
                title: "Complete Q4 Product Launch".to_string(),
                description: "Successfully launch the new product features by end of Q4"
                    .to_string(),
                progress: 75,
                target: 100,
                due_date: date(2024, 12, 31),
                status: GoalStatus::Active,
                category: "Product".to_string(),
            },
            Goal {
                id: "2".to_string(),
                title: "Increase Team Productivity".to_string(),
                description: "Improve team efficiency by 25% through better processes".to_string(),
                progress: 45,
                target: 100,
                due_date: date(2024, 12, 30),
                status: GoalStatus::Active,
                category: "Team".to_string(),
            },
        ];

        let documents = vec![
            Document {
                id: "1".to_string(),
                title: "Project Requirements Document".to_string(),
                content: "This document outlines the requirements for our upcoming project..."
                    .to_string(),
                author: user(0),
                created_at: midnight(date(2024, 12, 1)),
                updated_at: midnight(date(2024, 12, 10)),
                tags: vec!["requirements".to_string(), "project".to_string()],
                is_public: true,
            },
            Document {
                id: "2".to_string(),
                title: "Team Meeting Notes".to_string(),
                content: "Weekly team meeting notes and action items...".to_string(),
                author: user(1),
                created_at: midnight(date(2024, 12, 8)),
                updated_at: midnight(date(2024, 12, 8)),
                tags: vec!["meeting".to_string(), "notes".to_string()],
                is_public: false,
            },
        ];

        let automations = vec![
            Automation {
                id: "1".to_string(),
                name: "Auto-assign high priority tasks".to_string(),
                description: "Automatically assign high priority tasks to team leads".to_string(),
                trigger: "Task created with high priority".to_string(),
                action: "Assign to team lead".to_string(),
                is_active: true,
                created_at: midnight(date(2024, 11, 15)),
                last_run: Some(midnight(date(2024, 12, 10))),
                run_count: 23,
            },
            Automation {
                id: "2".to_string(),
                name: "Send deadline reminders".to_string(),
                description: "Send email reminders 2 days before task deadlines".to_string(),
                trigger: "2 days before due date".to_string(),
                action: "Send email notification".to_string(),
                is_active: true,
                created_at: midnight(date(2024, 11, 20)),
                last_run: Some(midnight(date(2024, 12, 9))),
                run_count: 15,
            },
        ];

        let workspaces = vec![
            Workspace {
                id: "1".to_string(),
                name: "Product Development".to_string(),
                description: "Main workspace for product development activities".to_string(),
                emoji: "🚀".to_string(),
                color: Color::Blue,
                members: users[0..4].to_vec(),
                created_at: midnight(date(2024, 11, 1)),
                is_default: true,
            },
            Workspace {
                id: "2".to_string(),
                name: "Marketing Team".to_string(),
                description: "Marketing campaigns and content creation".to_string(),
                emoji: "📈".to_string(),
                color: Color::Green,
                members: users[2..5].to_vec(),
                created_at: midnight(date(2024, 11, 5)),
                is_default: false,
            },
        ];

        Self {
            tasks,
            goals,
            documents,
            automations,
            workspaces,
        }
    }
}

/// The six users every store starts with.
pub fn reference_users() -> Vec<User> {
    vec![
        User::new("1", "Sarah Chen", "sarah@example.com"),
        User::new("2", "Mike Johnson", "mike@example.com"),
        User::new("3", "Alex Rodriguez", "alex@example.com"),
        User::new("4", "Emily Davis", "emily@example.com"),
        User::new("5", "John Smith", "john@example.com"),
        User::new("6", "Lisa Wang", "lisa@example.com"),
    ]
}

/// The four sidebar projects every store starts with.
pub fn reference_projects() -> Vec<Project> {
    let project = |id: &str, name: &str, emoji: &str, color: Color| Project {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        color,
        task_count: 0,
    };

    vec![
        project("1", "My Focus", "🧠", Color::Blue),
        project("2", "Product Launch", "🚀", Color::Purple),
        project("3", "Marketing", "📈", Color::Green),
        project("4", "Ideas", "💡", Color::Yellow),
    ]
}

fn unique_ids<'a>(collection: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(TrellisError::invalid_input(collection)
                .with_reason(format!("duplicate id '{id}'")));
        }
    }
    Ok(())
}

/// Midnight UTC at the start of `day`.
fn midnight(day: Date) -> Timestamp {
    day.to_zoned(TimeZone::UTC)
        .map_or(Timestamp::UNIX_EPOCH, |zoned| zoned.timestamp())
}

#[allow(clippy::too_many_arguments)]
fn sample_task(
    id: &str,
    name: &str,
    description: &str,
    status: TaskStatus,
    priority: Priority,
    assignee: User,
    due_date: Date,
    project: &str,
    (comment_count, attachment_count): (u32, u32),
    (created, updated): (Date, Date),
) -> Task {
    Task {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        status,
        priority,
        assignee,
        due_date,
        project: project.to_string(),
        comment_count,
        attachment_count,
        created_at: midnight(created),
        updated_at: midnight(updated),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_sample_shape() {
        let fixture = Fixture::sample();
        assert_eq!(fixture.tasks.len(), 6);
        assert_eq!(fixture.goals.len(), 2);
        assert_eq!(fixture.documents.len(), 2);
        assert_eq!(fixture.automations.len(), 2);
        assert_eq!(fixture.workspaces.len(), 2);
        assert_eq!(fixture.workspaces[0].members.len(), 4);
        assert_eq!(fixture.workspaces[1].members.len(), 3);
    }

    #[test]
    fn test_sample_ids_are_unique() {
        assert!(Fixture::sample().validate().is_ok());
    }

    #[test]
    fn test_duplicate_task_id_is_rejected() {
        let mut fixture = Fixture::sample();
        let mut stale = fixture.tasks[0].clone();
        stale.name = "Stale copy".to_string();
        fixture.tasks.push(stale);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&fixture).unwrap()).unwrap();

        let err = Fixture::from_path(file.path()).unwrap_err();
        match err {
            TrellisError::InvalidInput { field, reason } => {
                assert_eq!(field, "tasks");
                assert!(reason.contains("'1'"));
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_ids_checked_per_collection() {
        let mut fixture = Fixture::sample();
        fixture.workspaces[1].id = "1".to_string();
        let err = fixture.validate().unwrap_err();
        assert!(err.to_string().contains("'workspaces'"));

        // The same id in different collections is fine
        let fixture = Fixture::sample();
        assert_eq!(fixture.tasks[0].id, fixture.goals[0].id);
        assert!(fixture.validate().is_ok());
    }

    #[test]
    fn test_reference_users_initials() {
        let initials: Vec<String> = reference_users().into_iter().map(|u| u.initials).collect();
        assert_eq!(initials, vec!["SC", "MJ", "AR", "ED", "JS", "LW"]);
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let fixture = Fixture::sample();
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string_pretty(&fixture).unwrap()).unwrap();

        let loaded = Fixture::from_path(file.path()).unwrap();
        assert_eq!(loaded, fixture);
    }

    #[test]
    fn test_partial_fixture_defaults_missing_collections() {
        let fixture: Fixture = serde_json::from_str(r#"{"goals": []}"#).unwrap();
        assert!(fixture.tasks.is_empty());
        assert!(fixture.workspaces.is_empty());
    }

    #[test]
    fn test_missing_file_is_filesystem_error() {
        let err = Fixture::from_path(Path::new("/nonexistent/trellis/fixture.json")).unwrap_err();
        assert!(matches!(err, TrellisError::FileSystem { .. }));
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = Fixture::from_path(file.path()).unwrap_err();
        assert!(matches!(err, TrellisError::Serialization { .. }));
    }

    #[test]
    fn test_load_into_store() {
        let mut store = Store::default();
        Fixture::sample().load_into(&mut store);

        let state = store.state();
        assert_eq!(state.tasks.len(), 6);
        assert_eq!(state.automations.len(), 2);
        assert!(state.automations.iter().all(|a| a.is_active));
        assert_eq!(store.filtered_tasks().len(), 6);
    }
}
