//! `help-all`: every command's help on one page.

use anyhow::Result;
use clap::{Command, CommandFactory, Parser};

use crate::cli::Cli;

/// Help command for displaying the help of every command at once.
#[derive(Parser)]
pub struct HelpCommand {}

impl HelpCommand {
    /// Executes the help command.
    pub fn execute(self) -> Result<()> {
        println!("{}", render_all_help(Cli::command()));
        Ok(())
    }
}

/// Renders the root help followed by each subcommand's help.
///
/// Subcommands are sorted by name so the page is stable across releases.
fn render_all_help(root: Command) -> String {
    let mut sections = vec![render_section(&root, None)];

    let mut subcommands: Vec<&Command> = root
        .get_subcommands()
        .filter(|cmd| cmd.get_name() != "help")
        .collect();
    subcommands.sort_by(|a, b| a.get_name().cmp(b.get_name()));

    for cmd in subcommands {
        sections.push(render_section(cmd, Some(root.get_name())));
    }

    sections.join(&format!("\n\n{}\n\n", "=".repeat(80)))
}

fn render_section(cmd: &Command, parent: Option<&str>) -> String {
    let title = match parent {
        Some(parent) => format!("{parent} {}", cmd.get_name()),
        None => cmd.get_name().to_string(),
    };
    let about = cmd
        .get_about()
        .map_or_else(|| "No description available".to_string(), ToString::to_string);

    format!("{title} - {about}\n\n{}", cmd.clone().render_help())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> String {
        render_all_help(Cli::command())
    }

    #[test]
    fn contains_every_command() {
        let output = page();
        for name in [
            "check",
            "commit",
            "compose",
            "example",
            "help-all",
            "info",
            "questions",
            "schema",
        ] {
            assert!(
                output.contains(&format!("zyda-cz {name} - ")),
                "missing section for {name}"
            );
        }
    }

    #[test]
    fn sections_are_sorted() {
        let output = page();
        let check = output.find("zyda-cz check - ").unwrap();
        let commit = output.find("zyda-cz commit - ").unwrap();
        let schema = output.find("zyda-cz schema - ").unwrap();
        assert!(check < commit && commit < schema);
    }

    #[test]
    fn sections_are_separated() {
        assert!(page().contains(&"=".repeat(80)));
    }

    #[test]
    fn root_section_describes_tool() {
        let output = page();
        assert!(output.starts_with("zyda-cz - "));
        assert!(output.contains("zyda convention"));
    }

    #[test]
    fn deterministic() {
        assert_eq!(page(), page());
    }
}
