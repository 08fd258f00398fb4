//! # zyda-cz
//!
//! The zyda commit message convention: a question set for collecting a
//! commit message interactively, a composer that renders the answers into a
//! single message, and a recognition grammar that extracts the description
//! from an existing message.
//!
//! ## Quick Start
//!
//! ```rust
//! use zyda_cz::grammar::{compose, Answers, Prefix};
//!
//! let answers = Answers::builder(Prefix::Fix)
//!     .scope("auth")
//!     .subject("handle null token")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(compose(&answers), "Fix/auth: handle null token");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod data;
pub mod grammar;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of zyda-cz.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
