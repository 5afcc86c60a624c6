//! Linear undo/redo history of whole-document snapshots.
//!
//! The manager owns every snapshot it holds. Values are moved in and out, so a
//! stored snapshot is never reachable through a mutable reference held by the
//! editor.

use std::collections::VecDeque;

use lichtplan_core::constants::MAX_HISTORY;

use crate::model::Project;

/// A document snapshot plus the name of the action it precedes.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub snapshot: Project,
    pub description: String,
}

/// Bounded past/future stacks.
///
/// `undo_stack` runs oldest to newest; `redo_stack` runs nearest-undo first.
#[derive(Debug, Clone)]
pub struct UndoRedoManager {
    undo_stack: VecDeque<HistoryEntry>,
    redo_stack: VecDeque<HistoryEntry>,
    max_depth: usize,
}

impl UndoRedoManager {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Records the document as it was before an edit. Forfeits all redo history.
    pub fn record(&mut self, snapshot: Project, description: impl Into<String>) {
        self.undo_stack.push_back(HistoryEntry {
            snapshot,
            description: description.into(),
        });
        self.redo_stack.clear();
        self.enforce_depth();
    }

    /// Swaps `current` with the newest snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self, current: &mut Project) -> bool {
        let Some(entry) = self.undo_stack.pop_back() else {
            return false;
        };
        let undone = std::mem::replace(current, entry.snapshot);
        self.redo_stack.push_front(HistoryEntry {
            snapshot: undone,
            description: entry.description,
        });
        true
    }

    /// Swaps `current` with the nearest redo snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self, current: &mut Project) -> bool {
        let Some(entry) = self.redo_stack.pop_front() else {
            return false;
        };
        let redone = std::mem::replace(current, entry.snapshot);
        self.undo_stack.push_back(HistoryEntry {
            snapshot: redone,
            description: entry.description,
        });
        self.enforce_depth();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(|e| e.description.clone())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.front().map(|e| e.description.clone())
    }

    /// The snapshot the next undo would restore.
    pub fn peek_undo(&self) -> Option<&Project> {
        self.undo_stack.back().map(|e| &e.snapshot)
    }

    /// The snapshot the next redo would restore.
    pub fn peek_redo(&self) -> Option<&Project> {
        self.redo_stack.front().map(|e| &e.snapshot)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn enforce_depth(&mut self) {
        while self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new(MAX_HISTORY)
    }
}
