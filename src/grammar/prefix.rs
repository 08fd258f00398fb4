//! Change-type prefixes offered by the interactive composer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GrammarError;

/// The kind of change a commit introduces.
///
/// This is the composer's vocabulary. It deliberately differs from the
/// recognition grammar's [`TypeTag`](super::matcher::TypeTag) in both casing
/// and membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prefix {
    /// Non-breaking change which fixes an issue.
    Bug,
    /// Build tasks, package manager configs; no production code change.
    Chore,
    /// Documentation only changes.
    Docs,
    /// A new feature.
    Feature,
    /// A bug fix.
    Fix,
    /// A bug fix shipped outside the regular release flow.
    Hotfix,
    /// A code change that neither fixes a bug nor adds a feature.
    Refactor,
    /// A new release of the project.
    Release,
    /// Adding missing or correcting existing tests.
    Test,
}

impl Prefix {
    /// All prefixes in display order.
    pub const ALL: [Prefix; 9] = [
        Prefix::Bug,
        Prefix::Chore,
        Prefix::Docs,
        Prefix::Feature,
        Prefix::Fix,
        Prefix::Hotfix,
        Prefix::Refactor,
        Prefix::Release,
        Prefix::Test,
    ];

    /// Returns the literal written at the start of a composed message.
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Bug => "Bug",
            Prefix::Chore => "Chore",
            Prefix::Docs => "Docs",
            Prefix::Feature => "Feature",
            Prefix::Fix => "Fix",
            Prefix::Hotfix => "Hotfix",
            Prefix::Refactor => "Refactor",
            Prefix::Release => "Release",
            Prefix::Test => "Test",
        }
    }

    /// Returns the label shown next to the prefix in the choice list.
    pub fn label(self) -> &'static str {
        match self {
            Prefix::Bug => "Bug: non-breaking change which fixes an issue",
            Prefix::Chore => {
                "Chore: updating build tasks, package manager configs, etc; no production code change"
            }
            Prefix::Docs => "Docs: Documentation only changes",
            Prefix::Feature => "Feature: Add a new feature",
            Prefix::Fix => "Fix: A bug fix",
            Prefix::Hotfix => "Hotfix: A bug fix",
            Prefix::Refactor => {
                "Refactor: A code change that neither fixes a bug nor adds a feature"
            }
            Prefix::Release => {
                "Release: release a new version of the project scripts (example scopes: GitLabCI)"
            }
            Prefix::Test => "Test: Adding missing or correcting existing tests",
        }
    }

    /// Returns the single-key shortcut used to pick the prefix.
    pub fn key(self) -> char {
        match self {
            Prefix::Bug => 'b',
            Prefix::Chore => 'c',
            Prefix::Docs => 'd',
            Prefix::Feature => 'f',
            Prefix::Fix => 'x',
            Prefix::Hotfix => 'h',
            Prefix::Refactor => 'r',
            Prefix::Release => 'z',
            Prefix::Test => 't',
        }
    }

    /// Looks a prefix up by its shortcut key.
    pub fn from_key(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prefix {
    type Err = GrammarError;

    /// Parses a prefix by value (case-insensitive) or by shortcut key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some(prefix) = Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
        {
            return Ok(prefix);
        }

        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(prefix) = Self::from_key(c) {
                return Ok(prefix);
            }
        }

        Err(GrammarError::UnknownPrefix(
            trimmed.to_string(),
            Self::expected(),
        ))
    }
}
