//! Document model: the Project / Floor / PlacedSymbol entity graph.
//!
//! Everything here is plain data plus read accessors. Writes go through
//! [`DesignerCommand`](crate::commands::DesignerCommand) so that every change is
//! recorded by the history in the same way. Lookups of unknown ids return `None`;
//! callers treat that as "nothing to do".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bounds::Bounds;
use crate::canvas::hit_area;
use crate::catalog::SymbolCatalog;

/// Generates a fresh identifier for projects, floors and placed symbols.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Background image of a floor, already decoded by the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlanImage {
    /// Encoded image data (data URL)
    pub data: String,
    pub width: u32,
    pub height: u32,
    pub file_name: String,
}

impl FloorPlanImage {
    pub fn new(data: impl Into<String>, width: u32, height: u32, file_name: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            width,
            height,
            file_name: file_name.into(),
        }
    }

    /// Image rectangle in floor coordinates; the image is drawn at the origin.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width as f64, self.height as f64)
    }
}

/// A symbol instance placed on a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedSymbol {
    /// Unique within the owning floor
    pub id: String,
    /// Symbol type, resolved against the catalog by the renderer only
    pub symbol_id: String,
    pub x: f64,
    pub y: f64,
    /// Degrees. Stored as given; only the rotate action wraps it.
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PlacedSymbol {
    /// Creates an unrotated, unlabelled symbol with a fresh id.
    pub fn new(symbol_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self::with_id(new_id(), symbol_id, x, y)
    }

    pub fn with_id(id: impl Into<String>, symbol_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            symbol_id: symbol_id.into(),
            x,
            y,
            rotation: 0.0,
            label: None,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Partial update of a placed symbol. `None` fields are left alone.
///
/// `label` is doubly optional: `Some(None)` removes the label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolPatch {
    pub symbol_id: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
    pub label: Option<Option<String>>,
}

impl SymbolPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn label(mut self, label: Option<String>) -> Self {
        self.label = Some(label);
        self
    }

    pub fn symbol_type(mut self, symbol_id: impl Into<String>) -> Self {
        self.symbol_id = Some(symbol_id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns a copy of `symbol` with the patch merged in.
    pub fn merged_into(&self, symbol: &PlacedSymbol) -> PlacedSymbol {
        PlacedSymbol {
            id: symbol.id.clone(),
            symbol_id: self
                .symbol_id
                .clone()
                .unwrap_or_else(|| symbol.symbol_id.clone()),
            x: self.x.unwrap_or(symbol.x),
            y: self.y.unwrap_or(symbol.y),
            rotation: self.rotation.unwrap_or(symbol.rotation),
            label: match &self.label {
                Some(label) => label.clone(),
                None => symbol.label.clone(),
            },
        }
    }
}

/// One storey of the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: String,
    pub name: String,
    pub floor_plan_image: Option<FloorPlanImage>,
    pub symbols: Vec<PlacedSymbol>,
    /// Tab ordering; not kept contiguous after removals
    pub order: i32,
}

impl Floor {
    pub fn new(name: impl Into<String>, order: i32) -> Self {
        Self::with_id(new_id(), name, order)
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>, order: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            floor_plan_image: None,
            symbols: Vec::new(),
            order,
        }
    }

    /// Finds a placed symbol by id.
    pub fn symbol(&self, symbol_id: &str) -> Option<&PlacedSymbol> {
        self.symbols.iter().find(|s| s.id == symbol_id)
    }

    pub(crate) fn symbol_mut(&mut self, symbol_id: &str) -> Option<&mut PlacedSymbol> {
        self.symbols.iter_mut().find(|s| s.id == symbol_id)
    }

    pub fn has_symbol(&self, symbol_id: &str) -> bool {
        self.symbol(symbol_id).is_some()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Document-space extent of everything drawn on this floor.
    ///
    /// Covers the background image and the rotated hit area of each symbol whose
    /// type resolves in `catalog`. Unresolved symbols are skipped, as the renderer
    /// skips them.
    pub fn content_bounds(&self, catalog: &dyn SymbolCatalog) -> Option<Bounds> {
        let image = self.floor_plan_image.as_ref().map(FloorPlanImage::bounds);
        self.symbols
            .iter()
            .filter_map(|symbol| {
                let def = catalog.lookup(&symbol.symbol_id)?;
                Some(
                    hit_area(def.width, def.height)
                        .rotated(symbol.rotation)
                        .translated(symbol.x, symbol.y),
                )
            })
            .chain(image)
            .reduce(|acc, b| acc.union(&b))
    }
}

/// Root aggregate. Exactly one is open at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub floors: Vec<Floor>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a project with a single empty floor.
    pub fn new(name: impl Into<String>, floor_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            name: name.into(),
            floors: vec![Floor::new(floor_name, 0)],
            created_at: now,
            updated_at: now,
        }
    }

    /// Finds a floor by id.
    pub fn floor(&self, floor_id: &str) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id == floor_id)
    }

    pub(crate) fn floor_mut(&mut self, floor_id: &str) -> Option<&mut Floor> {
        self.floors.iter_mut().find(|f| f.id == floor_id)
    }

    pub fn has_floor(&self, floor_id: &str) -> bool {
        self.floor(floor_id).is_some()
    }

    pub fn first_floor(&self) -> Option<&Floor> {
        self.floors.first()
    }

    /// Finds a placed symbol on a given floor.
    pub fn symbol(&self, floor_id: &str, symbol_id: &str) -> Option<&PlacedSymbol> {
        self.floor(floor_id)?.symbol(symbol_id)
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Total number of placed symbols over all floors.
    pub fn symbol_count(&self) -> usize {
        self.floors.iter().map(Floor::symbol_count).sum()
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new(
            lichtplan_core::constants::DEFAULT_PROJECT_NAME,
            lichtplan_core::constants::DEFAULT_FLOOR_NAME,
        )
    }
}
