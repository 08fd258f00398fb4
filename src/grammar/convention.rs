//! The zyda convention as a single plugin-style surface.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::answers::Answers;
use super::compose::compose;
use super::error::GrammarError;
use super::matcher::{match_message, Match, SCHEMA_PATTERN};
use super::questions::{questions, Question};

/// Documentation shipped with the binary.
pub const INFO: &str = include_str!("../templates/conventional_commits_info.txt");

/// Example message shown by `example`.
pub const EXAMPLE: &str = "Problem with user (#321)";

/// Human-readable message template.
pub const SCHEMA: &str = "<type>(<scope>): <subject>\n\
                          <BLANK LINE>\n\
                          <body>\n\
                          <BLANK LINE>\n\
                          (BREAKING CHANGE: )<footer>";

/// Questions, composer, matcher and documentation of the zyda convention.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZydaConvention;

impl ZydaConvention {
    /// Creates the convention.
    pub fn new() -> Self {
        Self
    }

    /// Returns the question set in display order.
    pub fn questions(&self) -> Vec<Question> {
        questions()
    }

    /// Renders validated answers into a commit message.
    pub fn message(&self, answers: &Answers) -> String {
        compose(answers)
    }

    /// Returns the example message.
    pub fn example(&self) -> &'static str {
        EXAMPLE
    }

    /// Returns the human-readable message template.
    pub fn schema(&self) -> &'static str {
        SCHEMA
    }

    /// Returns the recognition pattern source.
    pub fn schema_pattern(&self) -> &'static str {
        SCHEMA_PATTERN
    }

    /// Returns the embedded documentation.
    pub fn info(&self) -> &'static str {
        INFO
    }

    /// Reads documentation from `path` instead of the embedded copy.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::InfoUnreadable`] carrying the I/O error as is.
    pub fn info_from(&self, path: &Path) -> Result<String, GrammarError> {
        debug!(path = %path.display(), "Reading info override");
        fs::read_to_string(path).map_err(|source| GrammarError::InfoUnreadable {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Matches an existing commit message against the recognition grammar.
    pub fn process_commit(&self, commit: &str) -> Match {
        match_message(commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Prefix;
    use tempfile::TempDir;

    #[test]
    fn schema_template() {
        insta::assert_snapshot!(ZydaConvention::new().schema(), @r"
        <type>(<scope>): <subject>
        <BLANK LINE>
        <body>
        <BLANK LINE>
        (BREAKING CHANGE: )<footer>
        ");
    }

    #[test]
    fn example_text() {
        assert_eq!(ZydaConvention::new().example(), "Problem with user (#321)");
    }

    #[test]
    fn schema_pattern_is_unanchored_source() {
        let pattern = ZydaConvention::new().schema_pattern();
        assert!(pattern.starts_with("(chore|docs|feat|fix|init|refactor|release|style|test)"));
        assert!(!pattern.starts_with('^'));
    }

    #[test]
    fn embedded_info_mentions_breaking_change() {
        let info = ZydaConvention::new().info();
        assert!(info.contains("BREAKING CHANGE"));
        assert!(!info.is_empty());
    }

    #[test]
    fn info_from_reads_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("info.txt");
        fs::write(&path, "house rules\n").unwrap();

        assert_eq!(
            ZydaConvention::new().info_from(&path).unwrap(),
            "house rules\n"
        );
    }

    #[test]
    fn info_from_missing_file_surfaces_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let err = ZydaConvention::new().info_from(&path).unwrap_err();
        match err {
            GrammarError::InfoUnreadable { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn message_and_process_commit_delegate() {
        let cz = ZydaConvention::new();
        let answers = Answers::builder(Prefix::Docs)
            .subject("explain scopes")
            .build()
            .unwrap();

        assert_eq!(cz.message(&answers), "Docs: explain scopes");
        assert_eq!(cz.process_commit("Docs: explain scopes"), Match::NotMatched);
        assert_eq!(
            cz.process_commit("docs: explain scopes").description(),
            Some("explain scopes")
        );
    }
}
