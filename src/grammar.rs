//! Commit message grammar: questions, normalisation, composition and matching.

pub mod answers;
pub mod compose;
pub mod convention;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod prefix;
pub mod questions;

pub use answers::{Answers, AnswersBuilder, RawAnswers};
pub use compose::{compose, BREAKING_CHANGE_MARKER};
pub use convention::ZydaConvention;
pub use error::GrammarError;
pub use matcher::{match_message, Match, TypeTag, SCHEMA_PATTERN};
pub use normalize::{normalize_body, normalize_scope, normalize_subject, Subject};
pub use prefix::Prefix;
pub use questions::{questions, Choice, Normalizer, Question};
