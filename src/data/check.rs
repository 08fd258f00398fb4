//! Check command result types for commit message recognition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grammar::Match;

/// Result of checking one commit message against the recognition grammar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// First line of the message that was checked.
    pub message: String,
    /// Whether the message conforms.
    pub passes: bool,
    /// Matcher outcome.
    pub result: Match,
}

impl CheckReport {
    /// Builds a report from the checked text and its match outcome.
    pub fn new(text: &str, result: Match) -> Self {
        Self {
            message: text.lines().next().unwrap_or_default().to_string(),
            passes: result.is_match(),
            result,
        }
    }

    /// Determines the process exit code: 0 when the message conforms, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passes {
            0
        } else {
            1
        }
    }
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::match_message;

    #[test]
    fn report_keeps_first_line_only() {
        let text = "feat: add login\n\nbody";
        let report = CheckReport::new(text, match_message(text));
        assert_eq!(report.message, "feat: add login");
        assert!(report.passes);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn failing_report_exits_one() {
        let report = CheckReport::new("Fix/auth: x", match_message("Fix/auth: x"));
        assert!(!report.passes);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn empty_message_report() {
        let report = CheckReport::new("", match_message(""));
        assert_eq!(report.message, "");
        assert!(!report.passes);
    }

    #[test]
    fn output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("yaml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().to_string(), "text");
    }
}
