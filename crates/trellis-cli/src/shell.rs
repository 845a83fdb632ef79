//! Line-oriented command session over standard input.
//!
//! Each non-blank line is split into words, parsed with clap and executed
//! against the same store. Errors are reported and the session continues;
//! `exit`, `quit` or end of input ends it.

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use clap::Parser;
use jiff::Timestamp;
use log::{debug, warn};
use trellis_core::display::OperationStatus;

use crate::{cli::ShellLine, handlers::Cli, renderer::TerminalRenderer};

/// Run a session until the input is exhausted or the user leaves.
pub fn run(cli: &mut Cli, renderer: &TerminalRenderer, input: impl BufRead) -> Result<()> {
    for (number, line) in input.lines().enumerate() {
        let line = line.context("Failed to read command")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if matches!(trimmed, "exit" | "quit") {
            debug!("Session ended on line {}", number + 1);
            break;
        }

        match run_line(cli, trimmed) {
            Ok(output) => renderer.render(&output)?,
            Err(err) => {
                warn!("Line {}: {err:#}", number + 1);
                renderer.render(&OperationStatus::failure(format!("{err:#}")).to_string())?;
            }
        }
        println!();
    }
    Ok(())
}

fn run_line(cli: &mut Cli, line: &str) -> Result<String> {
    let words = split_words(line)?;
    match ShellLine::try_parse_from(words) {
        Ok(parsed) => cli.execute(parsed.command, Timestamp::now()),
        // Help and usage text are ordinary output in a session
        Err(err) => Ok(err.render().to_string()),
    }
}

/// Split a line into words, honouring single and double quotes and
/// backslash escapes.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"') | None, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => bail!("Trailing backslash"),
            },
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        bail!("Unterminated {q} quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
