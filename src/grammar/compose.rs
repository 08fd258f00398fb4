//! Rendering an answer set into a commit message.

use tracing::debug;

use super::answers::Answers;

/// Marker prepended to the footer of breaking changes.
pub const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE: ";

/// Renders the answers as `<prefix>[/<scope>]: <subject>[\n\n<body>][\n\n<footer>]`.
///
/// A breaking change always produces a footer, even an empty one, so the
/// message ends in `BREAKING CHANGE: ` when no footer text was given.
pub fn compose(answers: &Answers) -> String {
    let scope = answers
        .scope
        .as_deref()
        .map(|s| format!("/{s}"))
        .unwrap_or_default();

    let body = answers
        .body
        .as_deref()
        .map(|b| format!("\n\n{b}"))
        .unwrap_or_default();

    let footer = if answers.is_breaking_change {
        format!(
            "{BREAKING_CHANGE_MARKER}{}",
            answers.footer.as_deref().unwrap_or_default()
        )
    } else {
        answers.footer.clone().unwrap_or_default()
    };
    let footer = if footer.is_empty() {
        footer
    } else {
        format!("\n\n{footer}")
    };

    let message = format!(
        "{}{scope}: {}{body}{footer}",
        answers.prefix, answers.subject
    );

    debug!(
        prefix = %answers.prefix,
        has_body = answers.body.is_some(),
        breaking = answers.is_breaking_change,
        "Composed commit message"
    );

    message
}
