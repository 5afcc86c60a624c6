//! Document replacement and save bookkeeping for designer state.
//!
//! The designer never touches the file system. The shell reads and writes the
//! bytes; these methods only turn text into a document and back, and track
//! which file the document belongs to.

use std::path::PathBuf;

use lichtplan_core::ProjectFileError;

use super::{first_floor_id, DesignerState};
use crate::model::Project;
use crate::serialization::{deserialize_project, serialize_project};

impl DesignerState {
    /// Replaces the document with a fresh default project.
    pub fn new_project(&mut self) {
        let project = Project::new(
            &self.options.default_project_name,
            &self.options.default_floor_name,
        );
        self.replace_project(project, None);
        tracing::info!("Created new project");
    }

    /// Replaces the document with the project in `text`.
    ///
    /// On a format error nothing changes: the open document, its history and the
    /// session stay exactly as they were.
    pub fn open_project(
        &mut self,
        text: &str,
        path: Option<PathBuf>,
    ) -> Result<(), ProjectFileError> {
        let project = deserialize_project(text).inspect_err(|e| {
            tracing::warn!("Failed to open project: {}", e);
        })?;
        tracing::info!(
            "Opened project '{}' ({} floors, {} symbols)",
            project.name,
            project.floor_count(),
            project.symbol_count()
        );
        self.replace_project(project, path);
        Ok(())
    }

    /// Text to write for a save. Does not change the dirty flag.
    pub fn save_contents(&self) -> Result<String, ProjectFileError> {
        serialize_project(&self.project)
    }

    /// Records a successful save to `path`.
    pub fn mark_saved(&mut self, path: impl Into<PathBuf>) {
        self.current_file_path = Some(path.into());
        self.is_modified = false;
    }

    pub fn set_file_path(&mut self, path: Option<PathBuf>) {
        self.current_file_path = path;
    }

    pub fn mark_clean(&mut self) {
        self.is_modified = false;
    }

    /// Title shown by the shell: file name or project name, `*` when dirty.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(&self.project.name);

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }

    fn replace_project(&mut self, project: Project, path: Option<PathBuf>) {
        self.active_floor_id = first_floor_id(&project);
        self.project = project;
        self.current_file_path = path;
        self.is_modified = false;
        self.clear_history();
    }
}
