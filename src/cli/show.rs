//! Read-only commands describing the convention.

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use crate::data::check::OutputFormat;
use crate::grammar::ZydaConvention;
use crate::utils::Settings;

/// Schema command options.
#[derive(Parser)]
pub struct SchemaCommand {
    /// Prints the recognition pattern instead of the message template.
    #[arg(long)]
    pub pattern: bool,
}

impl SchemaCommand {
    /// Executes the schema command.
    pub fn execute(self) -> Result<()> {
        let cz = ZydaConvention::new();
        if self.pattern {
            println!("{}", cz.schema_pattern());
        } else {
            println!("{}", cz.schema());
        }
        Ok(())
    }
}

/// Example command options.
#[derive(Parser)]
pub struct ExampleCommand {}

impl ExampleCommand {
    /// Executes the example command.
    pub fn execute(self) -> Result<()> {
        println!("{}", ZydaConvention::new().example());
        Ok(())
    }
}

/// Info command options.
#[derive(Parser)]
pub struct InfoCommand {
    /// Reads documentation from this file instead of the built-in text.
    /// Defaults to ZYDA_CZ_INFO_FILE or `infoFile` in settings.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl InfoCommand {
    /// Executes the info command.
    pub fn execute(self) -> Result<()> {
        let settings = Settings::load().unwrap_or_else(|e| {
            warn!("Ignoring unreadable settings: {e:#}");
            Settings::default()
        });
        println!("{}", self.resolve(&settings)?);
        Ok(())
    }

    /// Returns the override file's contents, or the embedded text when none is configured.
    fn resolve(&self, settings: &Settings) -> Result<Cow<'static, str>> {
        let cz = ZydaConvention::new();
        match self.file.clone().or_else(|| settings.info_file()) {
            Some(path) => Ok(Cow::Owned(
                cz.info_from(&path).context("Failed to load info text")?,
            )),
            None => Ok(Cow::Borrowed(cz.info())),
        }
    }
}

/// Questions command options.
#[derive(Parser)]
pub struct QuestionsCommand {
    /// Output format: yaml (default) or json.
    #[arg(long, default_value = "yaml")]
    pub format: String,
}

impl QuestionsCommand {
    /// Executes the questions command.
    pub fn execute(self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn render(&self) -> Result<String> {
        let questions = ZydaConvention::new().questions();
        match self.format.parse::<OutputFormat>() {
            Ok(OutputFormat::Json) => serde_json::to_string_pretty(&questions)
                .context("Failed to serialize questions to JSON"),
            Ok(OutputFormat::Yaml) => {
                crate::data::to_yaml(&questions).context("Failed to serialize questions to YAML")
            }
            _ => anyhow::bail!(
                "Unsupported format '{}' for questions; use yaml or json",
                self.format
            ),
        }
    }
}
