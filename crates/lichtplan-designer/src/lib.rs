//! # Lichtplan Designer
//!
//! The document engine of the Lichtplan floor-plan editor: the project model,
//! the edits that can be made to it, the undo/redo history wrapped around those
//! edits, and the pan/zoom model of the canvas.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (session: active floor, dirty flag, file path)
//!   ├── Project (Floors → PlacedSymbols, optional FloorPlanImage)
//!   ├── DesignerCommand (pure Project → Project edits)
//!   └── UndoRedoManager (bounded snapshot stacks)
//!
//! CanvasState (tool, selection)
//!   └── Viewport (offset + clamped scale, pointer zoom, fit to bounds)
//!
//! SymbolCatalog (lookup only; misses are skipped)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use lichtplan_designer::{DesignerState, PlacedSymbol};
//!
//! let mut state = DesignerState::new();
//! let floor_id = state.active_floor_id().to_string();
//!
//! state.add_symbol(&floor_id, PlacedSymbol::new("wandlamp", 120.0, 80.0));
//! assert!(state.can_undo());
//!
//! state.undo();
//! assert_eq!(state.project().symbol_count(), 0);
//! ```

pub mod bounds;
pub mod canvas;
pub mod catalog;
pub mod commands;
pub mod designer_state;
pub mod history;
pub mod model;
pub mod serialization;
pub mod viewport;

pub use bounds::Bounds;
pub use canvas::{hit_area, ActiveTool, CanvasState};
pub use catalog::{
    missing_symbols, BuiltinCatalog, MissingSymbol, SymbolCatalog, SymbolCategory,
    SymbolDefinition,
};
pub use commands::DesignerCommand;
pub use designer_state::{DesignerOptions, DesignerState};
pub use history::{HistoryEntry, UndoRedoManager};
pub use model::{Floor, FloorPlanImage, PlacedSymbol, Project, SymbolPatch};
pub use serialization::{deserialize_project, serialize_project, PROJECT_FILE_EXTENSION};
pub use viewport::{ViewTransform, Viewport};
