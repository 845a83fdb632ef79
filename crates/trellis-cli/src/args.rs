use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ListDocsArgs, ListTasksArgs};

/// Terminal front end for the Trellis project board
///
/// Trellis keeps tasks, goals, documents, automations and workspaces in an
/// in-memory board seeded from a fixture. One-shot commands print a view of
/// the freshly seeded board; `shell` reads commands from standard input and
/// applies them to a single board for the whole session.
#[derive(Parser)]
#[command(version, about, name = "trellis")]
pub struct Args {
    /// JSON fixture to seed the board with. Defaults to
    /// $XDG_CONFIG_HOME/trellis/fixture.json when present, otherwise the
    /// built-in sample data
    #[arg(long, global = true, conflicts_with = "empty")]
    pub fixture: Option<PathBuf>,

    /// Start with an empty board (reference users and projects only)
    #[arg(long, global = true)]
    pub empty: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Trellis CLI
///
/// Every command except `shell` renders one view and exits. Without a
/// command the dashboard is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the task list
    #[command(aliases = ["t", "ls"])]
    Tasks(ListTasksArgs),
    /// Show the dashboard
    #[command(alias = "dash")]
    Dashboard,
    /// Show goals
    Goals,
    /// Show documents
    Docs(ListDocsArgs),
    /// Show automations
    Automations,
    /// Show workspaces
    Workspaces,
    /// Show projects
    Projects,
    /// Show users
    Users,
    /// Read commands from standard input, one per line
    Shell,
}
