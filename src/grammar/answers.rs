//! Typed answer set for the question flow.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::GrammarError;
use super::normalize::{normalize_body, normalize_scope, normalize_subject, Subject};
use super::prefix::Prefix;

/// One fully validated answer per question.
///
/// Optional text fields are `None` rather than empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answers {
    /// Kind of change.
    pub prefix: Prefix,
    /// Normalised scope slug.
    pub scope: Option<String>,
    /// Normalised, non-empty subject.
    pub subject: Subject,
    /// Normalised body paragraphs.
    pub body: Option<String>,
    /// Whether the footer gets the `BREAKING CHANGE: ` marker.
    pub is_breaking_change: bool,
    /// Free-form footer (issue references, breaking change notes).
    pub footer: Option<String>,
}

impl Answers {
    /// Starts building an answer set for the given prefix.
    pub fn builder(prefix: Prefix) -> AnswersBuilder {
        AnswersBuilder {
            prefix,
            ..AnswersBuilder::default()
        }
    }
}

/// Collects raw answers and normalises them on [`build`](AnswersBuilder::build).
#[derive(Debug, Clone)]
pub struct AnswersBuilder {
    prefix: Prefix,
    scope: Option<String>,
    subject: Option<String>,
    body: Option<String>,
    is_breaking_change: bool,
    footer: Option<String>,
}

impl Default for AnswersBuilder {
    fn default() -> Self {
        Self {
            prefix: Prefix::Feature,
            scope: None,
            subject: None,
            body: None,
            is_breaking_change: false,
            footer: None,
        }
    }
}

impl AnswersBuilder {
    /// Sets the raw scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the raw subject.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Sets the raw, possibly line-wrapped body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Flags the change as breaking.
    #[must_use]
    pub fn breaking(mut self, is_breaking_change: bool) -> Self {
        self.is_breaking_change = is_breaking_change;
        self
    }

    /// Sets the raw footer.
    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Normalises every field and produces the answer set.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::SubjectRequired`] when the subject is missing
    /// or normalises to nothing.
    pub fn build(self) -> Result<Answers, GrammarError> {
        let subject = normalize_subject(self.subject.as_deref())?;
        let scope = non_empty(normalize_scope(self.scope.as_deref()));
        let body = self.body.as_deref().map(normalize_body).and_then(non_empty);
        // The footer has no normaliser and is kept verbatim.
        let footer = self.footer.and_then(non_empty);

        Ok(Answers {
            prefix: self.prefix,
            scope,
            subject,
            body,
            is_breaking_change: self.is_breaking_change,
            footer,
        })
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Answers as they appear in a YAML or JSON answers file.
///
/// Keys mirror the question names. Only `prefix` and `subject` are required.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawAnswers {
    /// Prefix value or shortcut key.
    pub prefix: String,
    /// Raw scope.
    #[serde(default)]
    pub scope: Option<String>,
    /// Raw subject.
    #[serde(default)]
    pub subject: Option<String>,
    /// Raw body.
    #[serde(default)]
    pub body: Option<String>,
    /// Breaking change flag.
    #[serde(default)]
    pub is_breaking_change: bool,
    /// Raw footer.
    #[serde(default)]
    pub footer: Option<String>,
}

impl RawAnswers {
    /// Loads raw answers from a YAML file (JSON is accepted as a YAML subset).
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).with_context(|| {
            format!("Failed to read answers file: {}", path.as_ref().display())
        })?;

        crate::data::from_yaml(&content).context("Failed to parse answers file")
    }

    /// Validates and normalises the raw answers.
    ///
    /// # Errors
    ///
    /// Fails on an unknown prefix or a missing subject.
    pub fn into_answers(self) -> Result<Answers, GrammarError> {
        let prefix: Prefix = self.prefix.parse()?;

        let mut builder = Answers::builder(prefix).breaking(self.is_breaking_change);
        if let Some(scope) = self.scope {
            builder = builder.scope(scope);
        }
        if let Some(subject) = self.subject {
            builder = builder.subject(subject);
        }
        if let Some(body) = self.body {
            builder = builder.body(body);
        }
        if let Some(footer) = self.footer {
            builder = builder.footer(footer);
        }

        builder.build()
    }
}

impl TryFrom<RawAnswers> for Answers {
    type Error = GrammarError;

    fn try_from(raw: RawAnswers) -> Result<Self, Self::Error> {
        raw.into_answers()
    }
}
