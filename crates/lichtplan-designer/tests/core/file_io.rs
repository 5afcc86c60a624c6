use lichtplan_core::ProjectFileError;
use lichtplan_designer::designer_state::DesignerState;
use lichtplan_designer::model::{FloorPlanImage, PlacedSymbol};
use lichtplan_designer::serialization::{
    deserialize_project, load_from_file, save_to_file, serialize_project,
};
use tempfile::TempDir;

fn edited_state() -> DesignerState {
    let mut state = DesignerState::new();
    let floor_id = state.active_floor_id().to_string();
    state.set_project_name("Woning Jansen");
    state.set_floor_image(
        &floor_id,
        FloorPlanImage::new("data:image/png;base64,iVBORw0KGgo=", 1200, 800, "begane-grond.png"),
    );
    state.add_symbol(
        &floor_id,
        PlacedSymbol::new("dubbel-stopcontact", 320.5, 140.0)
            .with_rotation(180.0)
            .with_label("Keuken"),
    );
    state.add_floor("Eerste verdieping");
    state
}

#[test]
fn test_save_and_reopen_round_trip() {
    let state = edited_state();
    let text = state.save_contents().unwrap();

    let mut reopened = DesignerState::new();
    reopened.open_project(&text, None).unwrap();
    assert_eq!(reopened.project(), state.project());
}

#[test]
fn test_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("woning.lichtplan");
    let state = edited_state();

    save_to_file(state.project(), &path).unwrap();
    let loaded = load_from_file(&path).unwrap();
    assert_eq!(&loaded, state.project());
}

#[test]
fn test_open_resets_session() {
    let mut state = edited_state();
    let other = edited_state();
    let text = serialize_project(other.project()).unwrap();

    state
        .open_project(&text, Some("/tmp/woning.lichtplan".into()))
        .unwrap();
    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert!(!state.is_modified());
    assert_eq!(state.active_floor_id(), other.project().floors[0].id);
    assert_eq!(state.display_name(), "woning.lichtplan");
}

#[test]
fn test_failed_open_leaves_state_unchanged() {
    let mut state = edited_state();
    state.undo();
    let project = state.project().clone();
    let active = state.active_floor_id().to_string();
    let (undo, redo) = (state.history().undo_depth(), state.history().redo_depth());

    for text in ["{", "[]", r#"{"id":"a","name":"b"}"#, r#"{"id":"","name":"b","floors":[]}"#] {
        let err = state.open_project(text, None).unwrap_err();
        assert!(err.is_format_error(), "{text}: {err}");
    }

    assert_eq!(state.project(), &project);
    assert_eq!(state.active_floor_id(), active);
    assert_eq!(state.history().undo_depth(), undo);
    assert_eq!(state.history().redo_depth(), redo);
    assert!(state.is_modified());
}

#[test]
fn test_rejects_project_without_floors() {
    let mut project = edited_state().project().clone();
    project.floors.clear();
    let text = serialize_project(&project).unwrap();
    assert!(matches!(
        deserialize_project(&text),
        Err(ProjectFileError::NoFloors)
    ));
}

#[test]
fn test_open_floorless_project_keeps_session() {
    let mut state = edited_state();
    let before = state.project().clone();
    let mut floorless = before.clone();
    floorless.floors.clear();
    let text = serialize_project(&floorless).unwrap();

    let err = state.open_project(&text, None).unwrap_err();
    assert!(matches!(err, ProjectFileError::NoFloors));
    assert_eq!(state.project(), &before);
    assert!(state.active_floor().is_some());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_from_file(temp_dir.path().join("missing.lichtplan")).unwrap_err();
    assert!(matches!(err, ProjectFileError::Io(_)));
    assert!(!err.is_format_error());
}

#[test]
fn test_new_project_resets_everything() {
    let mut state = edited_state();
    state.mark_saved("/tmp/woning.lichtplan");
    state.new_project();

    assert_eq!(state.project().name, "Nieuw project");
    assert_eq!(state.project().floors[0].name, "Begane grond");
    assert!(state.current_file_path().is_none());
    assert!(!state.can_undo());
    assert!(!state.is_modified());
}

#[test]
fn test_display_name_marks_dirty() {
    let mut state = DesignerState::new();
    assert_eq!(state.display_name(), "Nieuw project");
    state.set_project_name("Woning");
    assert_eq!(state.display_name(), "Woning*");
    state.mark_saved("/tmp/woning.lichtplan");
    assert_eq!(state.display_name(), "woning.lichtplan");
}
