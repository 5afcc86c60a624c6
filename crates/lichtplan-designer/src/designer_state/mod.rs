//! Designer state: the open document, its history and the session around it.
//!
//! This module is split into submodules for better organization:
//! - `history`: snapshot-then-apply, undo/redo
//! - `floors`: floor and project-level edits, active floor
//! - `symbols`: placed symbol edits
//! - `selection`: edits driven by the canvas selection
//! - `file_io`: new/open/save bookkeeping

mod file_io;
mod floors;
mod history;
mod selection;
mod symbols;

use std::path::{Path, PathBuf};

use lichtplan_core::constants::{DEFAULT_FLOOR_NAME, DEFAULT_PROJECT_NAME, MAX_HISTORY};

use crate::history::UndoRedoManager;
use crate::model::{Floor, Project};

/// Construction parameters for [`DesignerState`].
#[derive(Clone, Debug)]
pub struct DesignerOptions {
    /// Number of undo steps kept
    pub history_limit: usize,
    pub default_project_name: String,
    pub default_floor_name: String,
}

impl Default for DesignerOptions {
    fn default() -> Self {
        Self {
            history_limit: MAX_HISTORY,
            default_project_name: DEFAULT_PROJECT_NAME.to_string(),
            default_floor_name: DEFAULT_FLOOR_NAME.to_string(),
        }
    }
}

/// Single-writer owner of the open project.
///
/// All document writes go through [`DesignerState::push_command`], which records
/// the previous document before replacing it.
#[derive(Clone, Debug)]
pub struct DesignerState {
    project: Project,
    active_floor_id: String,
    current_file_path: Option<PathBuf>,
    is_modified: bool,
    history: UndoRedoManager,
    options: DesignerOptions,
}

impl DesignerState {
    /// Creates a designer holding a fresh default project.
    pub fn new() -> Self {
        Self::with_options(DesignerOptions::default())
    }

    pub fn with_options(options: DesignerOptions) -> Self {
        let project = Project::new(&options.default_project_name, &options.default_floor_name);
        let active_floor_id = first_floor_id(&project);
        Self {
            project,
            active_floor_id,
            current_file_path: None,
            is_modified: false,
            history: UndoRedoManager::new(options.history_limit),
            options,
        }
    }

    /// The current document.
    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn active_floor_id(&self) -> &str {
        &self.active_floor_id
    }

    /// The floor shown in the viewport.
    pub fn active_floor(&self) -> Option<&Floor> {
        self.project.floor(&self.active_floor_id)
    }

    pub fn current_file_path(&self) -> Option<&Path> {
        self.current_file_path.as_deref()
    }

    /// True when there are changes since the last new/open/save.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn options(&self) -> &DesignerOptions {
        &self.options
    }

    /// Falls back to the first floor when the active one no longer exists.
    fn reconcile_active_floor(&mut self) {
        if !self.project.has_floor(&self.active_floor_id) {
            self.active_floor_id = first_floor_id(&self.project);
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

fn first_floor_id(project: &Project) -> String {
    project
        .first_floor()
        .map(|f| f.id.clone())
        .unwrap_or_default()
}
