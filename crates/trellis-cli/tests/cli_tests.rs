use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use trellis_core::Fixture;

/// Helper function to create an isolated config directory so no user fixture
/// is picked up
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn trellis_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trellis").expect("Failed to find trellis binary");
    cmd.env("XDG_CONFIG_HOME", config_dir.path())
        .env("XDG_CONFIG_DIRS", config_dir.path())
        .arg("--no-color");
    cmd
}

#[test]
fn test_cli_default_shows_dashboard() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dashboard"))
        .stdout(predicate::str::contains("- Total tasks: 6"))
        .stdout(predicate::str::contains("- Completion rate: 17%"))
        .stdout(predicate::str::contains("## Upcoming Deadlines"));
}

#[test]
fn test_cli_tasks_filter_blocked() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .args(["tasks", "--status", "blocked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tasks (1 of 6)"))
        .stdout(predicate::str::contains("Set up CI/CD pipeline"))
        .stdout(predicate::str::contains("Write API documentation").not());
}

#[test]
fn test_cli_tasks_search() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .args(["tasks", "--search", "API"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search: 'API'"))
        .stdout(predicate::str::contains("### 3. Write API documentation"))
        .stdout(predicate::str::contains("Optimize database queries").not());
}

#[test]
fn test_cli_tasks_board_and_calendar() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .args(["tasks", "--view", "board", "--sort", "priority"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## ○ To Do (2)"))
        .stdout(predicate::str::contains("## ✗ Blocked (1)"));

    trellis_cmd(&temp_dir)
        .args(["tasks", "--view", "calendar", "--month", "2024-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# December 2024"))
        .stdout(predicate::str::contains("- 2024-12-22: 6. Optimize database queries"));
}

#[test]
fn test_cli_invalid_values_rejected() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .args(["tasks", "--status", "done"])
        .assert()
        .failure();

    trellis_cmd(&temp_dir)
        .args(["tasks", "--month", "December"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM"));
}

#[test]
fn test_cli_reference_lists() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .arg("users")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Lisa Wang** (LW)"));

    trellis_cmd(&temp_dir)
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("💡 **Ideas**"));

    trellis_cmd(&temp_dir)
        .arg("workspaces")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Development (default)"));

    trellis_cmd(&temp_dir)
        .arg("automations")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Runs: 23"));

    trellis_cmd(&temp_dir)
        .arg("goals")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Progress: 45/100 (45%)"));
}

#[test]
fn test_cli_docs_search() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .args(["docs", "--search", "meeting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team Meeting Notes"))
        .stdout(predicate::str::contains("Project Requirements Document").not());
}

#[test]
fn test_cli_empty_board() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .args(["--empty", "tasks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tasks (0 of 0)"))
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_cli_fixture_file() {
    let temp_dir = create_cli_test_environment();
    let fixture_path = temp_dir.path().join("board.json");

    let mut fixture = Fixture::sample();
    fixture.tasks.retain(|task| task.id == "4");
    std::fs::write(
        &fixture_path,
        serde_json::to_string(&fixture).expect("Failed to serialize fixture"),
    )
    .expect("Failed to write fixture");

    trellis_cmd(&temp_dir)
        .args(["--fixture", fixture_path.to_str().unwrap(), "tasks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tasks (1 of 1)"))
        .stdout(predicate::str::contains("Set up CI/CD pipeline"));
}

#[test]
fn test_cli_default_fixture_from_config_dir() {
    let temp_dir = create_cli_test_environment();
    let config_dir = temp_dir.path().join("trellis");
    std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

    let fixture = Fixture {
        tasks: Vec::new(),
        ..Fixture::sample()
    };
    std::fs::write(
        config_dir.join("fixture.json"),
        serde_json::to_string(&fixture).expect("Failed to serialize fixture"),
    )
    .expect("Failed to write fixture");

    trellis_cmd(&temp_dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Total tasks: 0"))
        .stdout(predicate::str::contains("- Active goals: 2"));
}

#[test]
fn test_cli_missing_fixture_fails() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("missing.json");

    trellis_cmd(&temp_dir)
        .args(["--fixture", missing.to_str().unwrap(), "tasks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize board"));
}

#[test]
fn test_shell_delete_requires_confirm() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .arg("shell")
        .write_stdin("task delete 2\ntask show 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Repeat the command with --confirm"))
        .stdout(predicate::str::contains("### 2. Implement user authentication flow"));
}

#[test]
fn test_shell_session_keeps_state() {
    let temp_dir = create_cli_test_environment();
    let script = [
        "# comments and blank lines are skipped",
        "",
        r#"task add "Prepare launch checklist" --due 2024-12-13 -p high -a 3"#,
        "task delete 2 --confirm",
        "filter todo",
        "status",
    ]
    .join("\n");

    trellis_cmd(&temp_dir)
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task with ID: "))
        .stdout(predicate::str::contains(
            "Deleted task 'Implement user authentication flow' (ID: 2)",
        ))
        .stdout(predicate::str::contains("# Tasks (2 of 6)"))
        .stdout(predicate::str::contains("Prepare launch checklist"))
        .stdout(predicate::str::contains("- Filter: todo"));
}

#[test]
fn test_shell_reports_errors_and_continues() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .arg("shell")
        .write_stdin("frobnicate\ngoal progress 99 5\ntask add \"oops\ngoal progress 2 5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error:"))
        .stdout(predicate::str::contains("Error: Goal with ID 99 not found"))
        .stdout(predicate::str::contains("Error: Unterminated \" quote"))
        .stdout(predicate::str::contains("- Progress: 45 -> 50"));
}

#[test]
fn test_shell_projects_count_added_tasks() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .arg("shell")
        .write_stdin("task add \"Plan campaign\" --due 2025-01-10 --project Marketing\nprojects\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("**Marketing** (green, 1 tasks)"))
        .stdout(predicate::str::contains("**Ideas** (yellow, 0 tasks)"));
}

#[test]
fn test_shell_stops_at_exit() {
    let temp_dir = create_cli_test_environment();

    trellis_cmd(&temp_dir)
        .arg("shell")
        .write_stdin("automation toggle 1\nexit\nautomation toggle 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paused automation"))
        .stdout(predicate::str::contains("Activated automation").not());
}
