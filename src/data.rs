//! Serialization helpers and report types.

pub mod check;
pub mod yaml;

pub use check::*;
pub use yaml::*;
