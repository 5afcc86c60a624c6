//! Undo/redo functionality for designer state.

use chrono::Utc;

use super::DesignerState;
use crate::commands::DesignerCommand;
use crate::history::UndoRedoManager;
use crate::model::Project;

impl DesignerState {
    /// Applies a command: snapshot the current document, replace it, forfeit redo.
    ///
    /// A command that changes nothing leaves the document, the history and the
    /// dirty flag alone. Returns whether the document changed.
    pub fn push_command(&mut self, cmd: DesignerCommand) -> bool {
        let Some(next) = cmd.apply(&self.project, Utc::now()) else {
            tracing::debug!("Ignored no-op command: {}", cmd.description());
            return false;
        };
        let previous = std::mem::replace(&mut self.project, next);
        self.history.record(previous, cmd.description());
        self.is_modified = true;
        tracing::debug!(
            "Applied {} (undo depth {})",
            cmd.description(),
            self.history.undo_depth()
        );
        true
    }

    /// Restores the document before the last edit.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.project) {
            return false;
        }
        self.is_modified = true;
        self.reconcile_active_floor();
        tracing::debug!("Undo (undo depth {})", self.history.undo_depth());
        true
    }

    /// Re-applies the last undone edit.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo(&mut self.project) {
            return false;
        }
        self.is_modified = true;
        self.reconcile_active_floor();
        tracing::debug!("Redo (redo depth {})", self.history.redo_depth());
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    /// Read-only access to the history stacks.
    pub fn history(&self) -> &UndoRedoManager {
        &self.history
    }

    /// The snapshot the next undo would restore.
    pub fn undo_snapshot(&self) -> Option<&Project> {
        self.history.peek_undo()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
