//! Grammar error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or describing a commit message.
#[derive(Error, Debug)]
pub enum GrammarError {
    /// The subject normalised to an empty or whitespace-only string.
    #[error("Subject is required.")]
    SubjectRequired,

    /// A prefix outside the composer's change-type enumeration.
    #[error("Unknown commit prefix '{0}'. Expected one of: {1}")]
    UnknownPrefix(String, String),

    /// The info override file could not be read.
    #[error("Failed to read info file: {}", path.display())]
    InfoUnreadable {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
