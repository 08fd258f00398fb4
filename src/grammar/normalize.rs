//! Field normalisation for raw answers.
//!
//! Each normaliser takes exactly what the user typed and reduces it to the
//! canonical form the composer expects. Only the subject can be rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::GrammarError;

/// A commit subject that has passed [`normalize_subject`].
///
/// Holding a `Subject` proves the text is non-empty, so the composer never
/// needs to re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject(String);

impl Subject {
    /// Returns the normalised subject text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Subject {
    type Error = GrammarError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        normalize_subject(Some(&raw))
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.0
    }
}

/// Collapses a free-text scope into a single slug-like token.
///
/// `None`, empty and whitespace-only input all yield `""`. Multiple words are
/// joined with `-` in their original order, so `"user auth"` becomes
/// `"user-auth"`.
pub fn normalize_scope(raw: Option<&str>) -> String {
    let Some(text) = raw else {
        return String::new();
    };

    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [] => String::new(),
        [single] => (*single).to_string(),
        many => many.join("-"),
    }
}

/// Strips trailing periods and surrounding whitespace from a subject.
///
/// Periods are removed before whitespace, so `"done. "` keeps its period.
/// Case is left alone.
///
/// # Errors
///
/// Returns [`GrammarError::SubjectRequired`] when nothing is left.
pub fn normalize_subject(raw: Option<&str>) -> Result<Subject, GrammarError> {
    let normalized = raw.unwrap_or_default().trim_end_matches('.').trim();

    if normalized.is_empty() {
        return Err(GrammarError::SubjectRequired);
    }

    Ok(Subject(normalized.to_string()))
}

/// Unwraps terminal line breaks in a multi-line body.
///
/// Consecutive non-blank lines are joined with a single space; one or more
/// blank lines start a new paragraph, emitted as `"\n\n"`.
pub fn normalize_body(raw: &str) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs.join("\n\n")
}
