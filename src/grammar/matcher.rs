//! Recognition grammar for existing commit messages.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Source of the recognition pattern, as handed to external linters.
///
/// Group 1 is the type tag, group 2 the optional parenthesised scope and
/// group 3 the description including its leading whitespace.
pub const SCHEMA_PATTERN: &str =
    r"(chore|docs|feat|fix|init|refactor|release|style|test)(\(\S+\))?!?:(\s.*)";

// Anchored at the start only; `(?s)` lets the description run past the first line.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static COMMIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?s)^{SCHEMA_PATTERN}")).unwrap());

/// Type tags understood by the recognition grammar.
///
/// Not the same vocabulary as [`Prefix`](super::prefix::Prefix): tags are
/// lower-case and include `init`/`style`, while `Bug`, `Hotfix` and
/// `Feature` have no counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// `chore`
    Chore,
    /// `docs`
    Docs,
    /// `feat`
    Feat,
    /// `fix`
    Fix,
    /// `init`
    Init,
    /// `refactor`
    Refactor,
    /// `release`
    Release,
    /// `style`
    Style,
    /// `test`
    Test,
}

impl TypeTag {
    /// Returns the tag as written in a message.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Chore => "chore",
            TypeTag::Docs => "docs",
            TypeTag::Feat => "feat",
            TypeTag::Fix => "fix",
            TypeTag::Init => "init",
            TypeTag::Refactor => "refactor",
            TypeTag::Release => "release",
            TypeTag::Style => "style",
            TypeTag::Test => "test",
        }
    }

    fn from_capture(tag: &str) -> Option<Self> {
        Some(match tag {
            "chore" => TypeTag::Chore,
            "docs" => TypeTag::Docs,
            "feat" => TypeTag::Feat,
            "fix" => TypeTag::Fix,
            "init" => TypeTag::Init,
            "refactor" => TypeTag::Refactor,
            "release" => TypeTag::Release,
            "style" => TypeTag::Style,
            "test" => TypeTag::Test,
            _ => return None,
        })
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of matching a message against the recognition grammar.
///
/// `NotMatched` is distinct from a match whose description is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Match {
    /// The message conforms.
    Matched {
        /// Type tag at the start of the message.
        tag: TypeTag,
        /// Scope without its parentheses, when present.
        #[serde(skip_serializing_if = "Option::is_none")]
        scope: Option<String>,
        /// Whether `!` preceded the colon.
        breaking: bool,
        /// Everything after the colon, trimmed.
        description: String,
    },
    /// The message does not conform.
    NotMatched,
}

impl Match {
    /// Returns `true` for [`Match::Matched`].
    pub fn is_match(&self) -> bool {
        matches!(self, Match::Matched { .. })
    }

    /// Returns the extracted description, if the message matched.
    pub fn description(&self) -> Option<&str> {
        match self {
            Match::Matched { description, .. } => Some(description.as_str()),
            Match::NotMatched => None,
        }
    }

    /// Collapses the result into the legacy string form: the description, or
    /// `""` when the message did not match.
    pub fn description_or_empty(&self) -> &str {
        self.description().unwrap_or_default()
    }
}

/// Matches `text` against the recognition grammar from its first character.
///
/// Content after the first line is part of the description unless the
/// caller isolates the first line beforehand.
pub fn match_message(text: &str) -> Match {
    let Some(captures) = COMMIT_PATTERN.captures(text) else {
        debug!("Message does not match the recognition grammar");
        return Match::NotMatched;
    };

    let (Some(tag), Some(rest)) = (
        captures.get(1).and_then(|m| TypeTag::from_capture(m.as_str())),
        captures.get(3),
    ) else {
        return Match::NotMatched;
    };

    let scope = captures.get(2).map(|m| {
        let raw = m.as_str();
        raw[1..raw.len() - 1].to_string()
    });
    // Group 3 starts right after the colon, so `!` would sit just before it.
    let breaking = text[..rest.start() - 1].ends_with('!');
    let description = rest.as_str().trim().to_string();

    debug!(%tag, breaking, "Message matches the recognition grammar");

    Match::Matched {
        tag,
        scope,
        breaking,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{compose, Answers, Prefix};

    #[test]
    fn conventional_message_extracts_description() {
        let result = match_message("feat(auth): add login");
        assert_eq!(result.description(), Some("add login"));
        assert_eq!(
            result,
            Match::Matched {
                tag: TypeTag::Feat,
                scope: Some("auth".to_string()),
                breaking: false,
                description: "add login".to_string(),
            }
        );
    }

    #[test]
    fn bang_marks_breaking() {
        let result = match_message("refactor!: drop v1 api");
        assert!(matches!(
            result,
            Match::Matched { tag: TypeTag::Refactor, breaking: true, scope: None, .. }
        ));
        assert_eq!(result.description_or_empty(), "drop v1 api");

        let scoped = match_message("fix(core)!:  panic on empty input ");
        assert!(matches!(scoped, Match::Matched { breaking: true, .. }));
        assert_eq!(scoped.description(), Some("panic on empty input"));
    }

    #[test]
    fn composed_message_does_not_match() {
        let result = match_message("Fix/auth: handle null token");
        assert_eq!(result, Match::NotMatched);
        assert_eq!(result.description_or_empty(), "");
    }

    #[test]
    fn matched_with_empty_description_is_not_a_non_match() {
        // The colon must be followed by whitespace; the description itself may be blank.
        let result = match_message("chore: ");
        assert!(result.is_match());
        assert_eq!(result.description(), Some(""));
        assert_eq!(match_message("chore:"), Match::NotMatched);
    }

    #[test]
    fn anchored_at_start() {
        assert_eq!(match_message("WIP feat: thing"), Match::NotMatched);
        assert_eq!(match_message(" feat: thing"), Match::NotMatched);
    }

    #[test]
    fn trailing_lines_are_captured_verbatim() {
        let result = match_message("docs: update guide\n\nlonger body\nhere\n");
        assert_eq!(
            result.description(),
            Some("update guide\n\nlonger body\nhere")
        );
    }

    #[test]
    fn unknown_tags_do_not_match() {
        for text in ["perf: faster", "build: ci", "Feat: add", "feature: add"] {
            assert_eq!(match_message(text), Match::NotMatched, "{text}");
        }
    }

    #[test]
    fn matcher_only_tags_match() {
        assert!(match_message("init: scaffold project").is_match());
        assert!(match_message("style: rustfmt").is_match());
    }

    #[test]
    fn scope_may_not_contain_whitespace() {
        assert_eq!(match_message("feat(user auth): x"), Match::NotMatched);
    }

    #[test]
    fn composer_output_never_round_trips() {
        // The composer's vocabulary and the recognition grammar disagree,
        // so no composed message is recognised.
        for prefix in Prefix::ALL {
            for scope in ["", "auth"] {
                let answers = Answers::builder(prefix)
                    .scope(scope)
                    .subject("handle null token")
                    .build()
                    .unwrap();
                let message = compose(&answers);
                assert_eq!(match_message(&message), Match::NotMatched, "{message}");
            }
        }
    }

    #[test]
    fn match_serializes_with_status_tag() {
        let json = serde_json::to_value(match_message("feat: add login")).unwrap();
        assert_eq!(json["status"], "matched");
        assert_eq!(json["tag"], "feat");
        assert_eq!(json["description"], "add login");

        let json = serde_json::to_value(Match::NotMatched).unwrap();
        assert_eq!(json["status"], "not_matched");
    }
}
