//! Floor and project-level operations for designer state.

use super::DesignerState;
use crate::commands::*;
use crate::model::{new_id, FloorPlanImage};

impl DesignerState {
    /// Appends an empty floor and makes it active. Returns the new floor id.
    pub fn add_floor(&mut self, name: impl Into<String>) -> String {
        let floor_id = new_id();
        if self.push_command(DesignerCommand::AddFloor(AddFloor {
            floor_id: floor_id.clone(),
            name: name.into(),
        })) {
            self.active_floor_id = floor_id.clone();
        }
        floor_id
    }

    /// Removes a floor. The last remaining floor is never removed.
    ///
    /// If the removed floor was active, the first remaining floor becomes active.
    pub fn remove_floor(&mut self, floor_id: &str) -> bool {
        let removed = self.push_command(DesignerCommand::RemoveFloor(RemoveFloor {
            floor_id: floor_id.to_string(),
        }));
        if removed {
            self.reconcile_active_floor();
        }
        removed
    }

    pub fn rename_floor(&mut self, floor_id: &str, name: impl Into<String>) -> bool {
        self.push_command(DesignerCommand::RenameFloor(RenameFloor {
            floor_id: floor_id.to_string(),
            name: name.into(),
        }))
    }

    /// Replaces the background image of a floor.
    pub fn set_floor_image(&mut self, floor_id: &str, image: FloorPlanImage) -> bool {
        self.push_command(DesignerCommand::SetFloorImage(SetFloorImage {
            floor_id: floor_id.to_string(),
            image,
        }))
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) -> bool {
        self.push_command(DesignerCommand::SetProjectName(SetProjectName {
            name: name.into(),
        }))
    }

    /// Switches the visible floor. Unknown ids are ignored; never recorded in history.
    pub fn set_active_floor(&mut self, floor_id: &str) -> bool {
        if !self.project.has_floor(floor_id) {
            tracing::debug!("Ignored switch to unknown floor {}", floor_id);
            return false;
        }
        self.active_floor_id = floor_id.to_string();
        true
    }
}
