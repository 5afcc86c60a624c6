use lichtplan_designer::designer_state::DesignerState;
use lichtplan_designer::model::PlacedSymbol;
use lichtplan_designer::viewport::Viewport;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    Add(f64, f64),
    MoveFirst(f64, f64),
    RotateFirst(f64),
    RemoveFirst,
    DuplicateFirst,
    AddFloor,
    Rename(String),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Edit::Add(x, y)),
        (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(x, y)| Edit::MoveFirst(x, y)),
        prop_oneof![Just(45.0), Just(90.0)].prop_map(Edit::RotateFirst),
        Just(Edit::RemoveFirst),
        Just(Edit::DuplicateFirst),
        Just(Edit::AddFloor),
        "[a-z]{1,8}".prop_map(Edit::Rename),
    ]
}

fn run(state: &mut DesignerState, edit: &Edit) -> bool {
    let floor_id = state.active_floor_id().to_string();
    let first = state
        .active_floor()
        .and_then(|f| f.symbols.first())
        .map(|s| s.id.clone());
    match edit {
        Edit::Add(x, y) => state.add_symbol(&floor_id, PlacedSymbol::new("dimmer", *x, *y)),
        Edit::MoveFirst(x, y) => first.is_some_and(|id| state.move_symbol(&floor_id, &id, *x, *y)),
        Edit::RotateFirst(degrees) => {
            first.is_some_and(|id| state.rotate_symbol(&floor_id, &id, *degrees))
        },
        Edit::RemoveFirst => first.is_some_and(|id| state.remove_symbol(&floor_id, &id)),
        Edit::DuplicateFirst => {
            first.is_some_and(|id| state.duplicate_symbol(&floor_id, &id).is_some())
        }
        Edit::AddFloor => {
            state.add_floor("Verdieping");
            true
        }
        Edit::Rename(name) => state.set_project_name(name.clone()),
    }
}

proptest! {
    #[test]
    fn undo_everything_restores_original(edits in prop::collection::vec(edit_strategy(), 1..40)) {
        let mut state = DesignerState::new();
        let original = state.project().clone();

        let mut applied = 0;
        for edit in &edits {
            if run(&mut state, edit) {
                applied += 1;
            }
        }
        prop_assert_eq!(state.history().undo_depth(), applied);

        for _ in 0..applied {
            prop_assert!(state.undo());
        }
        prop_assert_eq!(state.project(), &original);
        prop_assert!(!state.can_undo());
    }

    #[test]
    fn undo_then_redo_restores_post_state(edits in prop::collection::vec(edit_strategy(), 1..20)) {
        let mut state = DesignerState::new();
        for edit in &edits {
            run(&mut state, edit);
        }
        prop_assume!(state.can_undo());

        let after = state.project().clone();
        prop_assert!(state.undo());
        prop_assert!(state.redo());
        prop_assert_eq!(state.project(), &after);
        prop_assert!(state.project().has_floor(state.active_floor_id()));
    }

    #[test]
    fn history_never_exceeds_cap(count in 0usize..120) {
        let mut state = DesignerState::new();
        for i in 0..count {
            state.set_project_name(format!("Project {}", i));
        }
        prop_assert_eq!(state.history().undo_depth(), count.min(50));
    }

    #[test]
    fn scale_stays_in_range(ops in prop::collection::vec((0u8..4, 0.0..2000.0f64, 0.0..2000.0f64), 0..200)) {
        let mut vp = Viewport::new();
        for (op, x, y) in ops {
            match op {
                0 => vp.zoom_in(),
                1 => vp.zoom_out(),
                2 => vp.wheel_zoom(x, y, true),
                _ => vp.wheel_zoom(x, y, false),
            }
            prop_assert!((0.1..=5.0).contains(&vp.scale()));
        }
    }

    #[test]
    fn zoom_at_keeps_document_point_under_pointer(
        scale in 0.1..5.0f64,
        offset_x in -500.0..500.0f64,
        offset_y in -500.0..500.0f64,
        pointer_x in 0.0..1920.0f64,
        pointer_y in 0.0..1080.0f64,
        new_scale in 0.1..5.0f64,
    ) {
        let mut vp = Viewport::new();
        vp.set_scale(scale);
        vp.pan(offset_x, offset_y);

        let before = vp.screen_to_document(pointer_x, pointer_y);
        vp.zoom_at(pointer_x, pointer_y, new_scale);
        let (sx, sy) = vp.document_to_screen(before.0, before.1);

        prop_assert!((sx - pointer_x).abs() < 1e-6);
        prop_assert!((sy - pointer_y).abs() < 1e-6);
    }
}
