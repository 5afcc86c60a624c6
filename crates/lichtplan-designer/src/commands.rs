//! Document mutations.
//!
//! Each [`DesignerCommand`] maps the current [`Project`] to a new one. The input is
//! never touched: an effective command returns a fresh value, a no-op returns
//! `None` so the caller can skip the history entry entirely.

use chrono::{DateTime, Utc};
use lichtplan_core::constants::DUPLICATE_OFFSET;

use crate::model::{Floor, FloorPlanImage, PlacedSymbol, Project, SymbolPatch};

#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum DesignerCommand {
    AddSymbol(AddSymbol),
    UpdateSymbol(UpdateSymbol),
    RemoveSymbol(RemoveSymbol),
    DuplicateSymbol(DuplicateSymbol),
    AddFloor(AddFloor),
    RemoveFloor(RemoveFloor),
    RenameFloor(RenameFloor),
    SetFloorImage(SetFloorImage),
    SetProjectName(SetProjectName),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddSymbol {
    pub floor_id: String,
    pub symbol: PlacedSymbol,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSymbol {
    pub floor_id: String,
    pub symbol_id: String,
    pub patch: SymbolPatch,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveSymbol {
    pub floor_id: String,
    pub symbol_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateSymbol {
    pub floor_id: String,
    pub symbol_id: String,
    /// Id given to the copy; chosen up front so the caller can select it.
    pub new_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddFloor {
    pub floor_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveFloor {
    pub floor_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenameFloor {
    pub floor_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetFloorImage {
    pub floor_id: String,
    pub image: FloorPlanImage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetProjectName {
    pub name: String,
}

impl DesignerCommand {
    /// Name of the action, shown next to undo/redo.
    pub fn description(&self) -> &'static str {
        match self {
            DesignerCommand::AddSymbol(_) => "Add Symbol",
            DesignerCommand::UpdateSymbol(_) => "Update Symbol",
            DesignerCommand::RemoveSymbol(_) => "Remove Symbol",
            DesignerCommand::DuplicateSymbol(_) => "Duplicate Symbol",
            DesignerCommand::AddFloor(_) => "Add Floor",
            DesignerCommand::RemoveFloor(_) => "Remove Floor",
            DesignerCommand::RenameFloor(_) => "Rename Floor",
            DesignerCommand::SetFloorImage(_) => "Set Floor Image",
            DesignerCommand::SetProjectName(_) => "Rename Project",
        }
    }

    /// Computes the document after this command, or `None` if it changes nothing.
    ///
    /// `now` becomes the new `updated_at`.
    pub fn apply(&self, project: &Project, now: DateTime<Utc>) -> Option<Project> {
        let mut next = match self {
            DesignerCommand::AddSymbol(cmd) => {
                let floor = project.floor(&cmd.floor_id)?;
                if floor.has_symbol(&cmd.symbol.id) {
                    return None;
                }
                let mut next = project.clone();
                next.floor_mut(&cmd.floor_id)?
                    .symbols
                    .push(cmd.symbol.clone());
                next
            }
            DesignerCommand::UpdateSymbol(cmd) => {
                let current = project.symbol(&cmd.floor_id, &cmd.symbol_id)?;
                let updated = cmd.patch.merged_into(current);
                if &updated == current {
                    return None;
                }
                let mut next = project.clone();
                *next.floor_mut(&cmd.floor_id)?.symbol_mut(&cmd.symbol_id)? = updated;
                next
            }
            DesignerCommand::RemoveSymbol(cmd) => {
                let index = project
                    .floor(&cmd.floor_id)?
                    .symbols
                    .iter()
                    .position(|s| s.id == cmd.symbol_id)?;
                let mut next = project.clone();
                next.floor_mut(&cmd.floor_id)?.symbols.remove(index);
                next
            }
            DesignerCommand::DuplicateSymbol(cmd) => {
                let floor = project.floor(&cmd.floor_id)?;
                let original = floor.symbol(&cmd.symbol_id)?;
                if floor.has_symbol(&cmd.new_id) {
                    return None;
                }
                let copy = PlacedSymbol {
                    id: cmd.new_id.clone(),
                    x: original.x + DUPLICATE_OFFSET,
                    y: original.y + DUPLICATE_OFFSET,
                    ..original.clone()
                };
                let mut next = project.clone();
                next.floor_mut(&cmd.floor_id)?.symbols.push(copy);
                next
            }
            DesignerCommand::AddFloor(cmd) => {
                if project.has_floor(&cmd.floor_id) {
                    return None;
                }
                let order = i32::try_from(project.floors.len()).unwrap_or(i32::MAX);
                let mut next = project.clone();
                next.floors
                    .push(Floor::with_id(cmd.floor_id.clone(), cmd.name.clone(), order));
                next
            }
            DesignerCommand::RemoveFloor(cmd) => {
                if project.floors.len() <= 1 {
                    return None;
                }
                let index = project.floors.iter().position(|f| f.id == cmd.floor_id)?;
                let mut next = project.clone();
                next.floors.remove(index);
                next
            }
            DesignerCommand::RenameFloor(cmd) => {
                if project.floor(&cmd.floor_id)?.name == cmd.name {
                    return None;
                }
                let mut next = project.clone();
                next.floor_mut(&cmd.floor_id)?.name = cmd.name.clone();
                next
            }
            DesignerCommand::SetFloorImage(cmd) => {
                if project.floor(&cmd.floor_id)?.floor_plan_image.as_ref() == Some(&cmd.image) {
                    return None;
                }
                let mut next = project.clone();
                next.floor_mut(&cmd.floor_id)?.floor_plan_image = Some(cmd.image.clone());
                next
            }
            DesignerCommand::SetProjectName(cmd) => {
                if project.name == cmd.name {
                    return None;
                }
                let mut next = project.clone();
                next.name = cmd.name.clone();
                next
            }
        };
        next.updated_at = now;
        Some(next)
    }
}
