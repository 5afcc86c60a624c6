//! Symbol catalog boundary.
//!
//! The document only stores a symbol type string per placed symbol. Resolving
//! that string to a definition happens through [`SymbolCatalog`], and a miss is
//! a normal outcome: the symbol is simply not drawn.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Project;

/// Palette category of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolCategory {
    Verlichting,
    Elektra,
    Schakelaars,
    Overig,
}

impl SymbolCategory {
    /// All categories in palette order.
    pub const ALL: [SymbolCategory; 4] = [
        SymbolCategory::Verlichting,
        SymbolCategory::Elektra,
        SymbolCategory::Schakelaars,
        SymbolCategory::Overig,
    ];
}

impl fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verlichting => write!(f, "Verlichting"),
            Self::Elektra => write!(f, "Elektra"),
            Self::Schakelaars => write!(f, "Schakelaars"),
            Self::Overig => write!(f, "Overig"),
        }
    }
}

/// Drawable symbol type as seen by the document engine: identity and footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolDefinition {
    pub id: String,
    pub name: String,
    pub category: SymbolCategory,
    pub width: f64,
    pub height: f64,
}

impl SymbolDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: SymbolCategory,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            width,
            height,
        }
    }
}

/// Read-only lookup of symbol definitions.
pub trait SymbolCatalog {
    /// Resolves a symbol type id. `None` is not an error.
    fn lookup(&self, id: &str) -> Option<&SymbolDefinition>;

    fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }
}

/// The symbols shipped with the application.
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    symbols: Vec<SymbolDefinition>,
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        use SymbolCategory::*;
        let table: [(&str, &str, SymbolCategory, f64, f64); 17] = [
            ("lichtpunt-plafond", "Lichtpunt plafond", Verlichting, 30.0, 30.0),
            ("wandlamp", "Wandlamp", Verlichting, 30.0, 24.0),
            ("inbouwspot", "Inbouwspot", Verlichting, 26.0, 26.0),
            ("led-strip", "LED strip", Verlichting, 40.0, 10.0),
            ("noodverlichting", "Noodverlichting", Verlichting, 30.0, 30.0),
            ("enkelvoudig-stopcontact", "Enkelvoudig stopcontact", Elektra, 26.0, 20.0),
            ("dubbel-stopcontact", "Dubbel stopcontact", Elektra, 26.0, 24.0),
            ("geaard-stopcontact", "Geaard stopcontact", Elektra, 26.0, 24.0),
            ("dubbel-geaard-stopcontact", "Dubbel geaard stopcontact", Elektra, 26.0, 24.0),
            ("enkelpolige-schakelaar", "Enkelpolige schakelaar", Schakelaars, 26.0, 26.0),
            ("wisselschakelaar", "Wisselschakelaar", Schakelaars, 26.0, 26.0),
            ("dimmer", "Dimmer", Schakelaars, 26.0, 26.0),
            ("serieschakelaar", "Serieschakelaar", Schakelaars, 26.0, 26.0),
            ("persoon", "Persoon", Overig, 20.0, 30.0),
            ("aansluitpunt", "Aansluitpunt", Overig, 16.0, 16.0),
            ("centraaldoos", "Centraaldoos", Overig, 26.0, 26.0),
            ("bewegingssensor", "Bewegingssensor", Overig, 30.0, 30.0),
        ];
        Self {
            symbols: table
                .into_iter()
                .map(|(id, name, category, w, h)| SymbolDefinition::new(id, name, category, w, h))
                .collect(),
        }
    }

    pub fn all(&self) -> &[SymbolDefinition] {
        &self.symbols
    }

    pub fn by_category(&self, category: SymbolCategory) -> impl Iterator<Item = &SymbolDefinition> {
        self.symbols.iter().filter(move |s| s.category == category)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolCatalog for BuiltinCatalog {
    fn lookup(&self, id: &str) -> Option<&SymbolDefinition> {
        self.symbols.iter().find(|s| s.id == id)
    }
}

/// A placed symbol whose type is unknown to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSymbol {
    pub floor_id: String,
    pub placed_id: String,
    pub symbol_id: String,
}

/// Lists placed symbols that the renderer will skip.
pub fn missing_symbols(project: &Project, catalog: &dyn SymbolCatalog) -> Vec<MissingSymbol> {
    let mut missing = Vec::new();
    for floor in &project.floors {
        for symbol in &floor.symbols {
            if !catalog.contains(&symbol.symbol_id) {
                tracing::warn!(
                    "Symbol type '{}' of '{}' on floor '{}' is not in the catalog",
                    symbol.symbol_id,
                    symbol.id,
                    floor.name
                );
                missing.push(MissingSymbol {
                    floor_id: floor.id.clone(),
                    placed_id: symbol.id.clone(),
                    symbol_id: symbol.symbol_id.clone(),
                });
            }
        }
    }
    missing
}
