//! Canvas interaction state: active tool, selection and the viewport.
//!
//! None of this is part of the document and none of it is recorded in history.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::viewport::Viewport;

/// Tool the pointer currently acts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTool {
    /// Click selects and drags symbols
    #[default]
    Select,
    /// Drag pans the stage
    Pan,
}

impl fmt::Display for ActiveTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => write!(f, "select"),
            Self::Pan => write!(f, "pan"),
        }
    }
}

/// Pointer-sensitive rectangle of a symbol, centred on its origin.
pub fn hit_area(width: f64, height: f64) -> Bounds {
    Bounds::new(-(width / 2.0), -(height / 2.0), width, height)
}

#[derive(Debug, Clone, Default)]
pub struct CanvasState {
    pub viewport: Viewport,
    active_tool: ActiveTool,
    selected_symbol: Option<String>,
}

impl CanvasState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            active_tool: ActiveTool::Select,
            selected_symbol: None,
        }
    }

    pub fn active_tool(&self) -> ActiveTool {
        self.active_tool
    }

    /// Switches tool. Any selection is dropped.
    pub fn set_active_tool(&mut self, tool: ActiveTool) {
        self.active_tool = tool;
        self.selected_symbol = None;
    }

    /// The stage itself only follows drags in pan mode, so symbols can be dragged otherwise.
    pub fn is_stage_draggable(&self) -> bool {
        self.active_tool == ActiveTool::Pan
    }

    pub fn selected_symbol(&self) -> Option<&str> {
        self.selected_symbol.as_deref()
    }

    pub fn select(&mut self, symbol_id: Option<String>) {
        self.selected_symbol = symbol_id;
    }

    pub fn clear_selection(&mut self) {
        self.selected_symbol = None;
    }
}
