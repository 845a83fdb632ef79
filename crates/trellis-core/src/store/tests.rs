//! Tests for the store, reducer and action classification.

use jiff::Timestamp;

use super::*;
use crate::{
    fixture::Fixture,
    models::{AppPage, FilterStatus, SortBy, TaskStatus, ViewMode},
};

/// Helper function to create a store seeded with the sample data
fn create_sample_store() -> Store {
    StoreBuilder::new()
        .with_sample_data()
        .build()
        .expect("Failed to build store")
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id.as_str()).collect()
}

fn later() -> Timestamp {
    Timestamp::from_second(1735689600).unwrap() // 2025-01-01 00:00:00 UTC
}

#[test]
fn test_sample_store_contents() {
    let store = create_sample_store();
    let state = store.state();

    assert_eq!(state.tasks.len(), 6);
    assert_eq!(state.goals.len(), 2);
    assert_eq!(state.documents.len(), 2);
    assert_eq!(state.automations.len(), 2);
    assert_eq!(state.workspaces.len(), 2);
    assert_eq!(state.users.len(), 6);
    assert_eq!(state.projects.len(), 4);
    assert_eq!(state.current_page, AppPage::Dashboard);
    assert!(state.selected_tasks.is_empty());
    assert_eq!(store.filtered_tasks().len(), 6);
}

#[test]
fn test_empty_store_keeps_reference_data() {
    let store = StoreBuilder::new().empty().build().unwrap();
    assert!(store.state().tasks.is_empty());
    assert_eq!(store.state().users.len(), 6);
    assert!(store.filtered_tasks().is_empty());
}

#[test]
fn test_update_task_replaces_exactly_once() {
    let mut store = create_sample_store();
    let updated = Task {
        status: TaskStatus::Completed,
        updated_at: later(),
        ..store.state().task("2").unwrap().clone()
    };

    store.dispatch(Action::UpdateTask(updated.clone()));

    let state = store.state();
    assert_eq!(state.tasks.len(), 6);
    assert_eq!(state.tasks.iter().filter(|t| t.id == "2").count(), 1);
    assert_eq!(state.task("2"), Some(&updated));
    // Position in the collection is kept
    assert_eq!(state.tasks[1].id, "2");
}

#[test]
fn test_update_unknown_task_is_noop() {
    let mut store = create_sample_store();
    let before = store.state().clone();

    let mut ghost = before.tasks[0].clone();
    ghost.id = "missing".to_string();
    store.dispatch(Action::UpdateTask(ghost));

    assert_eq!(store.state(), &before);
}

#[test]
fn test_add_task_appends() {
    let mut store = create_sample_store();
    let mut task = store.state().tasks[0].clone();
    task.id = "7".to_string();
    task.name = "New task".to_string();

    store.dispatch(Action::AddTask(task));
    assert_eq!(store.state().tasks.last().unwrap().id, "7");
    assert_eq!(store.filtered_tasks().len(), 7);
}

#[test]
fn test_delete_task_removes_from_selection() {
    let mut store = create_sample_store();
    store.dispatch(Action::ToggleTaskSelection("3".to_string()));
    store.dispatch(Action::ToggleTaskSelection("5".to_string()));

    store.dispatch(Action::DeleteTask("3".to_string()));

    let state = store.state();
    assert!(state.task("3").is_none());
    assert_eq!(state.selected_tasks, vec!["5".to_string()]);
    assert!(!ids(store.filtered_tasks()).contains(&"3"));
}

#[test]
fn test_bulk_delete_clears_selection() {
    let mut store = create_sample_store();
    store.dispatch(Action::SelectAllTasks(true));

    store.dispatch(Action::DeleteTasks(vec!["1".to_string(), "4".to_string()]));

    let state = store.state();
    assert_eq!(ids(&state.tasks), vec!["2", "3", "5", "6"]);
    assert!(state.selected_tasks.is_empty());

    // Selection is cleared even when nothing matched
    store.dispatch(Action::ToggleTaskSelection("2".to_string()));
    store.dispatch(Action::DeleteTasks(vec!["missing".to_string()]));
    assert!(store.state().selected_tasks.is_empty());
    assert_eq!(store.state().tasks.len(), 4);
}

#[test]
fn test_selection_toggles_and_select_all() {
    let mut store = create_sample_store();

    store.dispatch(Action::ToggleTaskSelection("2".to_string()));
    store.dispatch(Action::ToggleTaskSelection("1".to_string()));
    assert_eq!(
        store.state().selected_tasks,
        vec!["2".to_string(), "1".to_string()]
    );

    store.dispatch(Action::ToggleTaskSelection("2".to_string()));
    assert_eq!(store.state().selected_tasks, vec!["1".to_string()]);

    store.dispatch(Action::SelectAllTasks(true));
    assert_eq!(store.state().selected_tasks.len(), 6);
    assert!(store.state().is_selected("6"));

    store.dispatch(Action::SelectAllTasks(false));
    assert!(store.state().selected_tasks.is_empty());

    store.dispatch(Action::ToggleTaskSelection("4".to_string()));
    store.dispatch(Action::ClearSelection);
    assert!(store.state().selected_tasks.is_empty());
}

#[test]
fn test_task_modal() {
    let mut store = create_sample_store();
    let task = store.state().tasks[0].clone();

    store.dispatch(Action::OpenTaskModal(Some(task.clone())));
    assert!(store.state().is_task_modal_open);
    assert_eq!(store.state().editing_task, Some(task));

    store.dispatch(Action::CloseTaskModal);
    assert!(!store.state().is_task_modal_open);
    assert_eq!(store.state().editing_task, None);

    store.dispatch(Action::OpenTaskModal(None));
    assert!(store.state().is_task_modal_open);
    assert_eq!(store.state().editing_task, None);
}

#[test]
fn test_view_controls_drive_filtered_tasks() {
    let mut store = create_sample_store();

    store.dispatch(Action::SetFilterStatus(FilterStatus::Blocked));
    assert_eq!(ids(store.filtered_tasks()), vec!["4"]);

    store.dispatch(Action::SetFilterStatus(FilterStatus::All));
    store.dispatch(Action::SetSearchQuery("api".to_string()));
    let found = store.filtered_tasks();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Write API documentation");

    store.dispatch(Action::SetSearchQuery(String::new()));
    store.dispatch(Action::SetSortBy(SortBy::Priority));
    assert_eq!(ids(store.filtered_tasks()), vec!["1", "4", "6", "2", "5", "3"]);
}

#[test]
fn test_view_mode_and_page_leave_tasks_alone() {
    let mut store = create_sample_store();
    let before = store.filtered_tasks().to_vec();

    store.dispatch(Action::SetViewMode(ViewMode::Board));
    store.dispatch(Action::SetCurrentPage(AppPage::Tasks));

    assert_eq!(store.state().view_mode, ViewMode::Board);
    assert_eq!(store.state().current_page, AppPage::Tasks);
    assert_eq!(store.filtered_tasks(), before.as_slice());
}

#[test]
fn test_filtered_tasks_match_fresh_derivation() {
    let mut store = create_sample_store();
    store.dispatch_all([
        Action::SetSearchQuery("o".to_string()),
        Action::SetSortBy(SortBy::Name),
        Action::DeleteTask("5".to_string()),
    ]);

    let state = store.state();
    let fresh = crate::views::derive_tasks(&state.tasks, &state.task_query());
    assert_eq!(store.filtered_tasks(), fresh.as_slice());
}

#[test]
fn test_goal_lifecycle() {
    let mut store = create_sample_store();
    let advanced = store.state().goal("2").unwrap().adjust_progress(60);

    store.dispatch(Action::UpdateGoal(advanced));
    let goal = store.state().goal("2").unwrap();
    assert_eq!(goal.progress, 100);
    assert_eq!(goal.status, crate::models::GoalStatus::Completed);

    store.dispatch(Action::DeleteGoal("1".to_string()));
    assert_eq!(store.state().goals.len(), 1);
    assert!(store.state().goal("1").is_none());
}

#[test]
fn test_document_lifecycle() {
    let mut store = create_sample_store();
    let mut doc = store.state().documents[0].clone();
    doc.id = "3".to_string();
    doc.title = "Launch Checklist".to_string();

    store.dispatch(Action::AddDocument(doc));
    assert_eq!(store.state().documents.len(), 3);

    let mut edited = store.state().document("1").unwrap().clone();
    edited.is_public = false;
    store.dispatch(Action::UpdateDocument(edited));
    assert!(!store.state().document("1").unwrap().is_public);

    store.dispatch(Action::DeleteDocument("2".to_string()));
    let remaining: Vec<&str> = store
        .state()
        .documents
        .iter()
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(remaining, vec!["1", "3"]);
}

#[test]
fn test_toggle_automation_twice_restores_flag() {
    let mut store = create_sample_store();
    let original = store.state().automation("1").unwrap().is_active;

    store.dispatch(Action::ToggleAutomation("1".to_string()));
    assert_eq!(store.state().automation("1").unwrap().is_active, !original);
    // The other automation is untouched
    assert!(store.state().automation("2").unwrap().is_active);

    store.dispatch(Action::ToggleAutomation("1".to_string()));
    assert_eq!(store.state().automation("1").unwrap().is_active, original);
}

#[test]
fn test_workspace_lifecycle() {
    let mut store = create_sample_store();
    let mut workspace = store.state().workspaces[1].clone();
    workspace.id = "3".to_string();
    workspace.name = "Design".to_string();
    store.dispatch(Action::AddWorkspace(workspace));
    assert_eq!(store.state().workspaces.len(), 3);

    let mut renamed = store.state().workspace("1").unwrap().clone();
    renamed.name = "Core".to_string();
    store.dispatch(Action::UpdateWorkspace(renamed));
    assert_eq!(store.state().workspace("1").unwrap().name, "Core");
    assert_eq!(store.state().workspaces[0].id, "1");
}

#[test]
fn test_unknown_ids_are_noops() {
    let mut store = create_sample_store();
    let before = store.state().clone();
    let missing = || "missing".to_string();

    let mut goal = before.goals[0].clone();
    goal.id = missing();
    let mut doc = before.documents[0].clone();
    doc.id = missing();
    let mut workspace = before.workspaces[0].clone();
    workspace.id = missing();

    store.dispatch_all([
        Action::DeleteTask(missing()),
        Action::UpdateGoal(goal),
        Action::DeleteGoal(missing()),
        Action::UpdateDocument(doc),
        Action::DeleteDocument(missing()),
        Action::ToggleAutomation(missing()),
        Action::UpdateWorkspace(workspace),
    ]);

    assert_eq!(store.state(), &before);
}

#[test]
fn test_reduce_is_pure() {
    let state = Store::new(AppState::default()).into_state();
    let action = Action::SetSearchQuery("design".to_string());

    let first = reduce(state.clone(), action.clone());
    let second = reduce(state, action);
    assert_eq!(first, second);
}

#[test]
fn test_fixture_round_trip_through_store() {
    let fixture = Fixture::sample();
    let mut store = Store::default();
    fixture.clone().load_into(&mut store);

    let state = store.state();
    assert_eq!(state.tasks, fixture.tasks);
    assert_eq!(state.goals, fixture.goals);
    assert_eq!(state.automations, fixture.automations);
}

#[test]
fn test_action_classification() {
    assert!(Action::SetSortBy(SortBy::Name).affects_task_view());
    assert!(Action::DeleteTasks(vec![]).affects_task_view());
    assert!(!Action::SetViewMode(ViewMode::Calendar).affects_task_view());
    assert!(!Action::ToggleTaskSelection("1".to_string()).affects_task_view());

    assert!(Action::DeleteGoal("1".to_string()).is_destructive());
    assert!(Action::DeleteTasks(vec![]).is_destructive());
    assert!(!Action::ToggleAutomation("1".to_string()).is_destructive());

    assert_eq!(Action::ClearSelection.name(), "CLEAR_SELECTION");
    assert_eq!(Action::SetAutomations(vec![]).name(), "SET_AUTOMATIONS");
}
