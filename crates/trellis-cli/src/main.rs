//! Trellis CLI Application
//!
//! Command-line interface for the trellis project board.

mod args;
mod cli;
mod handlers;
mod renderer;
mod shell;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use trellis_core::StoreBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        fixture,
        empty,
        no_color,
        command,
    } = Args::parse();

    let mut builder = StoreBuilder::new().with_fixture_path(fixture.as_ref());
    if empty {
        builder = builder.empty();
    }
    let store = builder.build().context("Failed to initialize board")?;

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(store);

    info!("Trellis started");

    let output = match command {
        Some(Tasks(args)) => cli.list_tasks(args),
        Some(Dashboard) | None => cli.dashboard(),
        Some(Goals) => cli.goals(),
        Some(Docs(args)) => cli.docs(&args),
        Some(Automations) => cli.automations(),
        Some(Workspaces) => cli.workspaces(),
        Some(Projects) => cli.projects(),
        Some(Users) => cli.users(),
        Some(Shell) => {
            info!("Starting shell session");
            let stdin = std::io::stdin();
            return shell::run(&mut cli, &renderer, stdin.lock());
        }
    };

    renderer.render(&output)
}
