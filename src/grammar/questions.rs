//! Declarative question set consumed by the interactive prompt.

use serde::Serialize;

use super::error::GrammarError;
use super::normalize::{normalize_body, normalize_scope, normalize_subject};
use super::prefix::Prefix;

/// Answer key for the change type.
pub const PREFIX: &str = "prefix";
/// Answer key for the scope.
pub const SCOPE: &str = "scope";
/// Answer key for the subject.
pub const SUBJECT: &str = "subject";
/// Answer key for the body.
pub const BODY: &str = "body";
/// Answer key for the breaking change flag.
pub const IS_BREAKING_CHANGE: &str = "is_breaking_change";
/// Answer key for the footer.
pub const FOOTER: &str = "footer";

/// One entry of a choice-list question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Value stored in the answer set.
    pub value: &'static str,
    /// Text displayed to the user.
    pub label: &'static str,
    /// Shortcut key.
    pub key: char,
}

/// Normaliser applied to a free-text answer before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalizer {
    /// [`normalize_scope`]
    Scope,
    /// [`normalize_subject`]
    Subject,
    /// [`normalize_body`]
    Body,
}

impl Normalizer {
    /// Applies the normaliser to a raw answer.
    ///
    /// # Errors
    ///
    /// Only [`Normalizer::Subject`] can fail, with
    /// [`GrammarError::SubjectRequired`].
    pub fn apply(self, raw: &str) -> Result<String, GrammarError> {
        match self {
            Normalizer::Scope => Ok(normalize_scope(Some(raw))),
            Normalizer::Subject => normalize_subject(Some(raw)).map(String::from),
            Normalizer::Body => Ok(normalize_body(raw)),
        }
    }
}

/// A question descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    /// Pick one value from an ordered list.
    Choice {
        /// Answer key.
        name: &'static str,
        /// Prompt text.
        message: &'static str,
        /// Available choices, in display order.
        choices: Vec<Choice>,
    },
    /// Free-text answer.
    Text {
        /// Answer key.
        name: &'static str,
        /// Prompt text.
        message: &'static str,
        /// Whether the answer is read over several lines.
        multiline: bool,
        /// Normaliser applied to the raw answer.
        #[serde(skip_serializing_if = "Option::is_none")]
        normalizer: Option<Normalizer>,
    },
    /// Yes/no answer.
    Confirm {
        /// Answer key.
        name: &'static str,
        /// Prompt text.
        message: &'static str,
        /// Answer used when the user just presses enter.
        default: bool,
    },
}

impl Question {
    /// Returns the answer key.
    pub fn name(&self) -> &'static str {
        match self {
            Question::Choice { name, .. }
            | Question::Text { name, .. }
            | Question::Confirm { name, .. } => *name,
        }
    }

    /// Returns the prompt text.
    pub fn message(&self) -> &'static str {
        match self {
            Question::Choice { message, .. }
            | Question::Text { message, .. }
            | Question::Confirm { message, .. } => *message,
        }
    }
}

/// Returns the question set in display order.
pub fn questions() -> Vec<Question> {
    vec![
        Question::Choice {
            name: PREFIX,
            message: "Select the type of change you are committing",
            choices: Prefix::ALL
                .into_iter()
                .map(|p| Choice {
                    value: p.as_str(),
                    label: p.label(),
                    key: p.key(),
                })
                .collect(),
        },
        Question::Text {
            name: SCOPE,
            message: "What is the scope of this change? (class or file name): (press [enter] to skip)",
            multiline: false,
            normalizer: Some(Normalizer::Scope),
        },
        Question::Text {
            name: SUBJECT,
            message: "Write a short and imperative summary of the code changes: (lower case and no period)",
            multiline: false,
            normalizer: Some(Normalizer::Subject),
        },
        Question::Text {
            name: BODY,
            message: "Provide additional contextual information about the code changes: (press [enter] to skip)",
            multiline: true,
            normalizer: Some(Normalizer::Body),
        },
        Question::Confirm {
            name: IS_BREAKING_CHANGE,
            message: "Is this a BREAKING CHANGE? Correlates with MAJOR in SemVer",
            default: false,
        },
        Question::Text {
            name: FOOTER,
            message: "Footer. Information about Breaking Changes and reference issues that this commit closes: (press [enter] to skip)",
            multiline: false,
            normalizer: None,
        },
    ]
}
