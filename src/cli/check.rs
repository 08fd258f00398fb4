//! Check command — matches a message against the recognition grammar.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::data::check::{CheckReport, OutputFormat};
use crate::grammar::{Match, ZydaConvention};

/// Check command options.
#[derive(Parser)]
pub struct CheckCommand {
    /// Message to check. Read from --file or stdin when omitted.
    #[arg(value_name = "MESSAGE", conflicts_with = "file")]
    pub message: Option<String>,

    /// Reads the message from a file (e.g. .git/COMMIT_EDITMSG).
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Matches only the first line instead of the whole message.
    #[arg(long)]
    pub first_line: bool,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Suppresses the explanation printed for non-conforming messages.
    #[arg(long)]
    pub quiet: bool,
}

impl CheckCommand {
    /// Executes the check command and returns the exit code.
    pub fn execute(self) -> Result<i32> {
        let text = self.read_message(&mut io::stdin().lock())?;
        let report = self.check(&text);

        let format: OutputFormat = self.format.parse().unwrap_or_default();
        let (stdout, stderr) = self.render_report(&report, format)?;
        if let Some(stdout) = stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = stderr {
            eprintln!("{stderr}");
        }

        Ok(report.exit_code())
    }

    /// Resolves the message from the argument, the file or `reader`.
    fn read_message(&self, reader: &mut dyn Read) -> Result<String> {
        if let Some(message) = &self.message {
            return Ok(message.clone());
        }

        if let Some(path) = &self.file {
            return fs::read_to_string(path)
                .with_context(|| format!("Failed to read message file: {}", path.display()));
        }

        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .context("Failed to read message from stdin")?;
        Ok(text)
    }

    /// Runs the matcher, optionally on the first line only.
    fn check(&self, text: &str) -> CheckReport {
        let subject = if self.first_line {
            text.lines().next().unwrap_or_default()
        } else {
            text
        };

        CheckReport::new(text, ZydaConvention::new().process_commit(subject))
    }

    /// Renders the report as (stdout, stderr) text.
    fn render_report(
        &self,
        report: &CheckReport,
        format: OutputFormat,
    ) -> Result<(Option<String>, Option<String>)> {
        match format {
            OutputFormat::Text => Ok(self.render_text_report(report)),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(report)
                    .context("Failed to serialize report to JSON")?;
                Ok((Some(json), None))
            }
            OutputFormat::Yaml => {
                let yaml =
                    crate::data::to_yaml(report).context("Failed to serialize report to YAML")?;
                Ok((Some(yaml), None))
            }
        }
    }

    fn render_text_report(&self, report: &CheckReport) -> (Option<String>, Option<String>) {
        match &report.result {
            Match::Matched { description, .. } => (Some(description.clone()), None),
            Match::NotMatched if self.quiet => (None, None),
            Match::NotMatched => (
                None,
                Some(format!(
                    "❌ '{}' does not match the commit schema\n   expected: {}",
                    report.message,
                    ZydaConvention::new().schema_pattern()
                )),
            ),
        }
    }
}
