//! # Lichtplan Core
//!
//! Shared constants and error types for the Lichtplan workspace.
//! Every other crate depends on this one; it depends on nothing of ours.

pub mod constants;
pub mod error;

pub use error::{Error, ProjectFileError, Result};
