use lichtplan_designer::history::UndoRedoManager;
use lichtplan_designer::model::Project;

fn named(name: &str) -> Project {
    let mut project = Project::default();
    project.name = name.to_string();
    project
}

#[test]
fn test_undo_redo_manager_creation() {
    let manager = UndoRedoManager::new(50);
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(manager.undo_depth(), 0);
    assert_eq!(manager.redo_depth(), 0);
}

#[test]
fn test_record_single_action() {
    let mut manager = UndoRedoManager::new(50);
    manager.record(named("before"), "Add Symbol");
    assert!(manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(manager.undo_depth(), 1);
}

#[test]
fn test_undo_single_action() {
    let mut manager = UndoRedoManager::new(50);
    let mut current = named("after");
    manager.record(named("before"), "Add Symbol");

    assert!(manager.undo(&mut current));
    assert_eq!(current.name, "before");
    assert!(!manager.can_undo());
    assert!(manager.can_redo());
}

#[test]
fn test_redo_after_undo() {
    let mut manager = UndoRedoManager::new(50);
    let mut current = named("after");
    manager.record(named("before"), "Add Symbol");
    manager.undo(&mut current);

    assert!(manager.redo(&mut current));
    assert_eq!(current.name, "after");
    assert!(manager.can_undo());
    assert!(!manager.can_redo());
}

#[test]
fn test_multiple_undo_redo() {
    let mut manager = UndoRedoManager::new(50);
    let mut current = named("5");
    for i in 0..5 {
        manager.record(named(&i.to_string()), format!("Edit {}", i));
    }

    assert_eq!(manager.undo_depth(), 5);
    assert_eq!(manager.redo_depth(), 0);

    for _ in 0..5 {
        manager.undo(&mut current);
    }
    assert_eq!(current.name, "0");
    assert_eq!(manager.undo_depth(), 0);
    assert_eq!(manager.redo_depth(), 5);

    for _ in 0..5 {
        manager.redo(&mut current);
    }
    assert_eq!(current.name, "5");
    assert_eq!(manager.undo_depth(), 5);
    assert_eq!(manager.redo_depth(), 0);
}

#[test]
fn test_redo_clears_on_new_action() {
    let mut manager = UndoRedoManager::new(50);
    let mut current = named("C");
    manager.record(named("A"), "A");
    manager.record(named("B"), "B");
    manager.undo(&mut current);

    assert_eq!(manager.redo_depth(), 1);

    manager.record(named("B2"), "C");
    assert_eq!(manager.redo_depth(), 0);
    assert!(!manager.can_redo());
}

#[test]
fn test_max_depth_limit() {
    let mut manager = UndoRedoManager::new(3);
    for i in 0..5 {
        manager.record(named(&i.to_string()), format!("Action {}", i));
    }
    assert_eq!(manager.undo_depth(), 3);
    assert_eq!(manager.peek_undo().map(|p| p.name.as_str()), Some("4"));
}

#[test]
fn test_clear_history() {
    let mut manager = UndoRedoManager::new(50);
    let mut current = named("now");
    manager.record(named("before"), "Create");
    manager.undo(&mut current);

    assert!(!manager.can_undo());
    assert!(manager.can_redo());

    manager.clear();

    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(manager.undo_depth(), 0);
    assert_eq!(manager.redo_depth(), 0);
}

#[test]
fn test_descriptions() {
    let mut manager = UndoRedoManager::new(50);
    let mut current = named("now");
    manager.record(named("before"), "Move Symbol");
    assert_eq!(manager.undo_description(), Some("Move Symbol".to_string()));

    manager.undo(&mut current);
    assert_eq!(manager.undo_description(), None);
    assert_eq!(manager.redo_description(), Some("Move Symbol".to_string()));
}
