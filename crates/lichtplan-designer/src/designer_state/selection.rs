//! Edits driven by the canvas selection.

use super::DesignerState;
use crate::canvas::CanvasState;

impl DesignerState {
    /// Removes the selected symbol from the active floor and clears the selection.
    pub fn delete_selected(&mut self, canvas: &mut CanvasState) -> bool {
        let Some(selected) = canvas.selected_symbol().map(str::to_string) else {
            return false;
        };
        let floor_id = self.active_floor_id.clone();
        let removed = self.remove_symbol(&floor_id, &selected);
        canvas.clear_selection();
        removed
    }

    /// Rotates the selected symbol by `degrees`.
    pub fn rotate_selected(&mut self, canvas: &CanvasState, degrees: f64) -> bool {
        let Some(selected) = canvas.selected_symbol() else {
            return false;
        };
        let floor_id = self.active_floor_id.clone();
        self.rotate_symbol(&floor_id, selected, degrees)
    }

    /// Duplicates the selected symbol and selects the copy.
    pub fn duplicate_selected(&mut self, canvas: &mut CanvasState) -> Option<String> {
        let selected = canvas.selected_symbol()?.to_string();
        let floor_id = self.active_floor_id.clone();
        let new_id = self.duplicate_symbol(&floor_id, &selected)?;
        canvas.select(Some(new_id.clone()));
        Some(new_id)
    }

    /// Drops a palette symbol at a screen position onto the active floor and selects it.
    pub fn drop_symbol_at(
        &mut self,
        canvas: &mut CanvasState,
        screen_x: f64,
        screen_y: f64,
        symbol_type: &str,
    ) -> Option<String> {
        let (x, y) = canvas.viewport.screen_to_document(screen_x, screen_y);
        let floor_id = self.active_floor_id.clone();
        let id = self.place_symbol(&floor_id, symbol_type, x, y)?;
        canvas.select(Some(id.clone()));
        Some(id)
    }
}
