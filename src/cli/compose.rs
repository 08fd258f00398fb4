//! Compose command — renders a message without prompting.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::grammar::{compose, RawAnswers};

/// Compose command options.
#[derive(Parser)]
pub struct ComposeCommand {
    /// YAML or JSON file holding the answers, keyed by question name.
    #[arg(long, conflicts_with_all = ["prefix", "scope", "subject", "body", "breaking", "footer"])]
    pub answers: Option<PathBuf>,

    /// Change type: a type name (Bug, Chore, Docs, Feature, Fix, Hotfix,
    /// Refactor, Release, Test) or its shortcut key.
    #[arg(long, short, required_unless_present = "answers")]
    pub prefix: Option<String>,

    /// Scope of the change; several words are joined with hyphens.
    #[arg(long, short)]
    pub scope: Option<String>,

    /// Short imperative summary.
    #[arg(long, short = 'm')]
    pub subject: Option<String>,

    /// Additional context; blank lines separate paragraphs.
    #[arg(long, short)]
    pub body: Option<String>,

    /// Marks the change as breaking.
    #[arg(long)]
    pub breaking: bool,

    /// Footer with breaking change details and issue references.
    #[arg(long, short)]
    pub footer: Option<String>,
}

impl ComposeCommand {
    /// Executes the compose command.
    pub fn execute(self) -> Result<()> {
        let message = self.render()?;
        println!("{message}");
        Ok(())
    }

    /// Builds the answer set from the answers file or the flags and composes it.
    pub fn render(&self) -> Result<String> {
        let raw = match &self.answers {
            Some(path) => RawAnswers::load_from_file(path)?,
            None => RawAnswers {
                prefix: self.prefix.clone().unwrap_or_default(),
                scope: self.scope.clone(),
                subject: self.subject.clone(),
                body: self.body.clone(),
                is_breaking_change: self.breaking,
                footer: self.footer.clone(),
            },
        };

        let answers = raw.into_answers().context("Invalid answers")?;
        Ok(compose(&answers))
    }
}
