//! Placed symbol operations for designer state.

use super::DesignerState;
use crate::commands::*;
use crate::model::{new_id, PlacedSymbol, SymbolPatch};

impl DesignerState {
    /// Appends a symbol to a floor.
    pub fn add_symbol(&mut self, floor_id: &str, symbol: PlacedSymbol) -> bool {
        self.push_command(DesignerCommand::AddSymbol(AddSymbol {
            floor_id: floor_id.to_string(),
            symbol,
        }))
    }

    /// Merges `patch` into the matching symbol.
    pub fn update_symbol(&mut self, floor_id: &str, symbol_id: &str, patch: SymbolPatch) -> bool {
        self.push_command(DesignerCommand::UpdateSymbol(UpdateSymbol {
            floor_id: floor_id.to_string(),
            symbol_id: symbol_id.to_string(),
            patch,
        }))
    }

    pub fn remove_symbol(&mut self, floor_id: &str, symbol_id: &str) -> bool {
        self.push_command(DesignerCommand::RemoveSymbol(RemoveSymbol {
            floor_id: floor_id.to_string(),
            symbol_id: symbol_id.to_string(),
        }))
    }

    /// Copies a symbol, offset by the duplicate offset on both axes.
    ///
    /// Returns the id of the copy, or `None` when the original does not exist.
    pub fn duplicate_symbol(&mut self, floor_id: &str, symbol_id: &str) -> Option<String> {
        let new_id = new_id();
        let duplicated = self.push_command(DesignerCommand::DuplicateSymbol(DuplicateSymbol {
            floor_id: floor_id.to_string(),
            symbol_id: symbol_id.to_string(),
            new_id: new_id.clone(),
        }));
        duplicated.then_some(new_id)
    }

    /// Moves a symbol to an absolute document position (end of a drag).
    pub fn move_symbol(&mut self, floor_id: &str, symbol_id: &str, x: f64, y: f64) -> bool {
        self.update_symbol(floor_id, symbol_id, SymbolPatch::new().position(x, y))
    }

    /// Turns a symbol clockwise by `degrees`. The stored angle wraps into [0, 360).
    pub fn rotate_symbol(&mut self, floor_id: &str, symbol_id: &str, degrees: f64) -> bool {
        let Some(symbol) = self.project.symbol(floor_id, symbol_id) else {
            return false;
        };
        if !degrees.is_finite() {
            return false;
        }
        let rotation = (symbol.rotation + degrees).rem_euclid(360.0);
        self.update_symbol(floor_id, symbol_id, SymbolPatch::new().rotation(rotation))
    }

    /// Sets the label from user input; blank input removes the label.
    pub fn set_symbol_label(&mut self, floor_id: &str, symbol_id: &str, text: &str) -> bool {
        let trimmed = text.trim();
        let label = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.update_symbol(floor_id, symbol_id, SymbolPatch::new().label(label))
    }

    /// Places a new symbol of `symbol_type` at a document position.
    ///
    /// Returns the id of the new symbol, or `None` when the floor does not exist.
    pub fn place_symbol(
        &mut self,
        floor_id: &str,
        symbol_type: &str,
        x: f64,
        y: f64,
    ) -> Option<String> {
        let symbol = PlacedSymbol::new(symbol_type, x, y);
        let id = symbol.id.clone();
        self.add_symbol(floor_id, symbol).then_some(id)
    }
}
