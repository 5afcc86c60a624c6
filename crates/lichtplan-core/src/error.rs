//! Error handling for Lichtplan
//!
//! Only structurally invalid input is an error in this workspace. Stale ids,
//! removing the last floor and degenerate view bounds are silent no-ops and never
//! surface here.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Project file error type
///
/// Raised when a persisted project cannot be accepted. A failed open never
/// touches the document that is currently loaded.
#[derive(Error, Debug)]
pub enum ProjectFileError {
    /// The text is not JSON, or does not have the shape of a project
    #[error("Invalid project file: {0}")]
    Json(#[from] serde_json::Error),

    /// A required top-level field is empty
    #[error("Invalid project file: field '{0}' must not be empty")]
    MissingField(&'static str),

    /// The project has no floors
    #[error("Invalid project file: project has no floors")]
    NoFloors,

    /// The file could not be read or written
    #[error("Project file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectFileError {
    /// True when the error is about the file contents rather than access to it.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, ProjectFileError::Io(_))
    }
}

/// Main error type for Lichtplan
#[derive(Error, Debug)]
pub enum Error {
    /// Project file error
    #[error(transparent)]
    ProjectFile(#[from] ProjectFileError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a project file error
    pub fn is_project_file_error(&self) -> bool {
        matches!(self, Error::ProjectFile(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
