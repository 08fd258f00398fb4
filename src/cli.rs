//! CLI interface for zyda-cz.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub mod commit;
pub mod compose;
pub mod help;
pub mod show;

/// zyda-cz: compose and check commit messages following the zyda convention.
#[derive(Parser)]
#[command(name = "zyda-cz")]
#[command(about = "Compose and check commit messages following the zyda convention", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Asks the questions and prints the composed message.
    Commit(commit::CommitCommand),
    /// Composes a message from flags or an answers file.
    Compose(compose::ComposeCommand),
    /// Checks a message against the recognition grammar.
    Check(check::CheckCommand),
    /// Shows the message template.
    Schema(show::SchemaCommand),
    /// Shows an example message.
    Example(show::ExampleCommand),
    /// Shows documentation for the convention.
    Info(show::InfoCommand),
    /// Dumps the question set for external prompt engines.
    Questions(show::QuestionsCommand),
    /// Displays comprehensive help for all commands.
    #[command(name = "help-all")]
    HelpAll(help::HelpCommand),
}

impl Cli {
    /// Executes the CLI command and returns the process exit code.
    pub fn execute(self) -> Result<i32> {
        match self.command {
            Commands::Commit(cmd) => cmd.execute().map(|()| 0),
            Commands::Compose(cmd) => cmd.execute().map(|()| 0),
            Commands::Check(cmd) => cmd.execute(),
            Commands::Schema(cmd) => cmd.execute().map(|()| 0),
            Commands::Example(cmd) => cmd.execute().map(|()| 0),
            Commands::Info(cmd) => cmd.execute().map(|()| 0),
            Commands::Questions(cmd) => cmd.execute().map(|()| 0),
            Commands::HelpAll(cmd) => cmd.execute().map(|()| 0),
        }
    }
}
