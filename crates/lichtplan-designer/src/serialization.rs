//! Serialization and deserialization for project files.
//!
//! A project file is the [`Project`] value as pretty-printed UTF-8 JSON, with no
//! envelope and no version field. Loading validates just enough to guarantee a
//! usable document and rejects everything else as a whole.

use std::path::Path;

use lichtplan_core::ProjectFileError;

use crate::model::Project;

/// File extension used by the save/open dialogs.
pub const PROJECT_FILE_EXTENSION: &str = "lichtplan";

/// Serializes the project to the on-disk text form.
pub fn serialize_project(project: &Project) -> Result<String, ProjectFileError> {
    Ok(serde_json::to_string_pretty(project)?)
}

/// Parses and validates project file text.
///
/// Requires a non-empty `id`, a non-empty `name` and at least one floor.
pub fn deserialize_project(text: &str) -> Result<Project, ProjectFileError> {
    let project: Project = serde_json::from_str(text)?;

    if project.id.trim().is_empty() {
        return Err(ProjectFileError::MissingField("id"));
    }
    if project.name.trim().is_empty() {
        return Err(ProjectFileError::MissingField("name"));
    }
    if project.floors.is_empty() {
        return Err(ProjectFileError::NoFloors);
    }

    Ok(project)
}

/// Writes the project to `path`.
pub fn save_to_file(project: &Project, path: impl AsRef<Path>) -> Result<(), ProjectFileError> {
    let json = serialize_project(project)?;
    std::fs::write(path.as_ref(), json)?;
    tracing::debug!("Saved project '{}' to {}", project.name, path.as_ref().display());
    Ok(())
}

/// Reads and validates the project at `path`.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Project, ProjectFileError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    deserialize_project(&content).inspect_err(|e| {
        tracing::warn!("Rejected project file {}: {}", path.as_ref().display(), e);
    })
}
