//! Terminal rendering for markdown output
//!
//! Rich output goes through termimad; `--no-color` prints the markdown
//! unchanged.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for block in split_tables(markdown) {
            match block {
                Block::Table(table) => self.skin.print_text(&table),
                Block::Line(line) if line.starts_with('#') => {
                    // Keep the hash marks so headings read the same in both modes
                    println!("\x1b[34m{line}\x1b[0m");
                }
                Block::Line(line) => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[derive(Debug, PartialEq)]
enum Block<'a> {
    Line(&'a str),
    Table(String),
}

/// Group consecutive table rows so termimad can lay them out as one table.
fn split_tables(markdown: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut table = String::new();

    for line in markdown.lines() {
        if line.starts_with('|') {
            table.push_str(line);
            table.push('\n');
            continue;
        }
        if !table.is_empty() {
            blocks.push(Block::Table(std::mem::take(&mut table)));
        }
        blocks.push(Block::Line(line));
    }
    if !table.is_empty() {
        blocks.push(Block::Table(table));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_split_tables_groups_rows() {
        let blocks = split_tables("# December 2024\n\n| Sun | Mon |\n|---|---|\n| 1 | 2 |\n\nDone");
        assert_eq!(
            blocks,
            vec![
                Block::Line("# December 2024"),
                Block::Line(""),
                Block::Table("| Sun | Mon |\n|---|---|\n| 1 | 2 |\n".to_string()),
                Block::Line(""),
                Block::Line("Done"),
            ]
        );
    }

    #[test]
    fn test_split_tables_trailing_table() {
        let blocks = split_tables("| a |\n| b |");
        assert_eq!(blocks, vec![Block::Table("| a |\n| b |\n".to_string())]);
    }
}
