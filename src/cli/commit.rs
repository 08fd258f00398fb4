//! Commit command — asks the question set interactively.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;

use crate::grammar::questions::{BODY, FOOTER, IS_BREAKING_CHANGE, PREFIX, SCOPE, SUBJECT};
use crate::grammar::{compose, Choice, Prefix, Question, RawAnswers, ZydaConvention};

/// Line that ends a multi-line answer.
const END_OF_BODY: &str = ".";

/// Commit command options.
#[derive(Parser)]
pub struct CommitCommand {
    /// Writes the message to this file instead of stdout (e.g. .git/COMMIT_EDITMSG).
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl CommitCommand {
    /// Executes the commit command.
    pub fn execute(self) -> Result<()> {
        let stdin = io::stdin();
        let message = self.run(
            stdin.is_terminal(),
            &mut stdin.lock(),
            &mut io::stderr(),
        )?;

        match &self.output {
            Some(path) => {
                fs::write(path, &message)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("✅ Commit message written to {}", path.display());
            }
            None => println!("{message}"),
        }

        Ok(())
    }

    /// Asks every question and returns the composed message.
    ///
    /// `is_terminal`, `reader` and `out` are injected so tests can drive the
    /// prompt without a real terminal.
    pub fn run(
        &self,
        is_terminal: bool,
        reader: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<String> {
        if !is_terminal {
            bail!("stdin is not interactive; use `zyda-cz compose` to build a message from flags or an answers file");
        }

        let questions = ZydaConvention::new().questions();
        let raw = collect_answers(&questions, reader, out)?;
        let answers = raw.into_answers().context("Invalid answers")?;

        Ok(compose(&answers))
    }
}

/// Walks the question set in order and records one answer per question.
fn collect_answers(
    questions: &[Question],
    reader: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<RawAnswers> {
    let mut raw = RawAnswers::default();

    for question in questions {
        match question {
            Question::Choice {
                name,
                message,
                choices,
            } => {
                let value = ask_choice(message, choices, reader, out)?;
                record_text(&mut raw, name, value);
            }
            Question::Text {
                name,
                message,
                multiline,
                normalizer,
            } => loop {
                let input = if *multiline {
                    ask_multiline(message, reader, out)?
                } else {
                    ask_line(message, reader, out)?
                };

                // Answers are stored raw and normalised once when built.
                if let Some(Err(e)) = normalizer.as_ref().map(|n| n.apply(&input)) {
                    writeln!(out, "✗ {e}")?;
                    continue;
                }

                record_text(&mut raw, name, input);
                break;
            },
            Question::Confirm {
                name,
                message,
                default,
            } => {
                let value = ask_confirm(message, *default, reader, out)?;
                if *name == IS_BREAKING_CHANGE {
                    raw.is_breaking_change = value;
                }
            }
        }
    }

    debug!(prefix = %raw.prefix, "Collected answers");
    Ok(raw)
}

fn record_text(raw: &mut RawAnswers, name: &str, value: String) {
    match name {
        PREFIX => raw.prefix = value,
        SCOPE => raw.scope = Some(value),
        SUBJECT => raw.subject = Some(value),
        BODY => raw.body = Some(value),
        FOOTER => raw.footer = Some(value),
        other => debug!("Ignoring answer for unknown question '{other}'"),
    }
}

/// Reads one line, failing when input is closed.
fn read_answer(reader: &mut dyn BufRead) -> Result<String> {
    let mut input = String::new();
    let bytes = reader
        .read_line(&mut input)
        .context("Failed to read user input")?;
    if bytes == 0 {
        bail!("stdin closed, commit message cancelled");
    }
    Ok(input.trim_end_matches(['\n', '\r']).to_string())
}

fn ask_choice(
    message: &str,
    choices: &[Choice],
    reader: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<String> {
    writeln!(out, "? {message}")?;
    for (i, choice) in choices.iter().enumerate() {
        writeln!(out, "  {:>2}) [{}] {}", i + 1, choice.key, choice.label)?;
    }

    loop {
        write!(out, "  Answer: ")?;
        out.flush()?;

        let input = read_answer(reader)?;
        if let Some(choice) = pick_choice(input.trim(), choices) {
            return Ok(choice.value.to_string());
        }

        writeln!(
            out,
            "Invalid choice. Enter a number, a shortcut key or a type name."
        )?;
    }
}

/// Resolves a choice by 1-based index, shortcut key or value.
fn pick_choice<'a>(input: &str, choices: &'a [Choice]) -> Option<&'a Choice> {
    if input.is_empty() {
        return None;
    }

    if let Ok(index) = input.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| choices.get(i));
    }

    let prefix = input.parse::<Prefix>().ok()?;
    choices.iter().find(|c| c.value == prefix.as_str())
}

fn ask_line(message: &str, reader: &mut dyn BufRead, out: &mut dyn Write) -> Result<String> {
    writeln!(out, "? {message}")?;
    write!(out, "  > ")?;
    out.flush()?;
    read_answer(reader)
}

/// Reads lines until a lone `.`; an empty first line skips the answer.
fn ask_multiline(message: &str, reader: &mut dyn BufRead, out: &mut dyn Write) -> Result<String> {
    writeln!(out, "? {message}")?;
    writeln!(out, "  (end with a line containing only '{END_OF_BODY}')")?;
    out.flush()?;

    let mut lines: Vec<String> = Vec::new();
    loop {
        let line = read_answer(reader)?;
        if line.trim() == END_OF_BODY || (lines.is_empty() && line.trim().is_empty()) {
            break;
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

fn ask_confirm(
    message: &str,
    default: bool,
    reader: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };

    loop {
        write!(out, "? {message} {hint} ")?;
        out.flush()?;

        match read_answer(reader)?.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(out, "Please answer 'y' or 'n'.")?,
        }
    }
}
