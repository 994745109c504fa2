use crate::{click, draw_square, select_mode, send};
use glam::Vec2;
use shape_annotation_editor::core::EdgePropertyChange;
use shape_annotation_editor::{
    AppController, AppIntent, AppState, Document, EditMode, EditorOptions, PolygonRef,
};

#[test]
fn test_new_action_clears_redo() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 10.0, 0.0);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.can_redo());

    click(&mut controller, &mut state, 20.0, 20.0);

    assert!(!state.can_redo());
    assert_eq!(state.document.current_polygon.len(), 2);
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    send(&mut controller, &mut state, AppIntent::RedoRequested);

    assert!(state.document.current_polygon.is_empty());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
}

#[test]
fn test_history_depth_is_bounded() {
    let mut controller = AppController::new();
    let options = EditorOptions {
        history_max_depth: 3,
        ..EditorOptions::default()
    };
    let mut state = AppState::with_options(options);

    for i in 0..6 {
        click(&mut controller, &mut state, i as f32 * 10.0, 0.0);
    }

    assert_eq!(state.history.undo_len(), 3);
    for _ in 0..5 {
        send(&mut controller, &mut state, AppIntent::UndoRequested);
    }
    // Nur die letzten drei Ecken sind rückgängig zu machen
    assert_eq!(state.document.current_polygon.len(), 3);
}

#[test]
fn test_clear_all_is_undoable_and_prunes_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_square(&mut controller, &mut state, 0.0, 0.0);
    select_mode(&mut controller, &mut state, EditMode::Edit);
    click(&mut controller, &mut state, 50.0, 50.0);

    send(&mut controller, &mut state, AppIntent::ClearAllRequested);
    assert_eq!(state.polygon_count(), 0);
    assert!(state.selection.is_empty());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.polygon_count(), 1);

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.polygon_count(), 0);
}

#[test]
fn test_undo_restores_group_membership() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_square(&mut controller, &mut state, 0.0, 0.0);
    draw_square(&mut controller, &mut state, 200.0, 0.0);
    select_mode(&mut controller, &mut state, EditMode::Edit);
    click(&mut controller, &mut state, 50.0, 50.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(250.0, 50.0),
            additive: true,
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    send(&mut controller, &mut state, AppIntent::GroupSelectionRequested);
    send(&mut controller, &mut state, AppIntent::UngroupSelectionRequested);
    assert!(state.document.polygons.iter().all(|p| p.group_id.is_none()));

    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(state.document.polygons.iter().all(|p| p.group_id.is_some()));
    assert!(state.document.groups_consistent());
}

/// Führt einen Intent aus und hält das Dokument fest, falls ein Undo-Schritt entstand.
fn send_and_record(
    controller: &mut AppController,
    state: &mut AppState,
    intent: AppIntent,
    documents: &mut Vec<Document>,
) {
    let before = state.history.undo_len();
    send(controller, state, intent);
    if state.history.undo_len() > before {
        documents.push(state.document.clone());
    }
}

fn click_and_record(
    controller: &mut AppController,
    state: &mut AppState,
    pos: Vec2,
    additive: bool,
    documents: &mut Vec<Document>,
) {
    send_and_record(
        controller,
        state,
        AppIntent::PointerPressed {
            screen_pos: pos,
            additive,
        },
        documents,
    );
    send_and_record(controller, state, AppIntent::PointerReleased, documents);
}

#[test]
fn test_undo_redo_restores_every_document_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut documents = vec![state.document.clone()];

    for origin in [Vec2::ZERO, Vec2::new(200.0, 0.0)] {
        for corner in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)] {
            let pos = origin + Vec2::from(corner);
            click_and_record(&mut controller, &mut state, pos, false, &mut documents);
        }
        send_and_record(
            &mut controller,
            &mut state,
            AppIntent::ClosePolygonRequested,
            &mut documents,
        );
    }

    select_mode(&mut controller, &mut state, EditMode::Edit);
    // Verschieben
    send_and_record(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(50.0, 50.0),
            additive: false,
        },
        &mut documents,
    );
    send_and_record(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(60.0, 50.0),
        },
        &mut documents,
    );
    send_and_record(&mut controller, &mut state, AppIntent::PointerReleased, &mut documents);

    // Gruppieren
    click_and_record(&mut controller, &mut state, Vec2::new(250.0, 50.0), true, &mut documents);
    send_and_record(
        &mut controller,
        &mut state,
        AppIntent::GroupSelectionRequested,
        &mut documents,
    );

    // Eigenschaft
    send_and_record(
        &mut controller,
        &mut state,
        AppIntent::EdgePropertyChanged {
            polygon: PolygonRef::Completed(1),
            edge: 0,
            change: EdgePropertyChange::Curvature(10.0),
        },
        &mut documents,
    );

    // Gruppiertes Polygon löschen
    select_mode(&mut controller, &mut state, EditMode::Delete);
    click_and_record(&mut controller, &mut state, Vec2::new(250.0, 50.0), false, &mut documents);

    let steps = documents.len() - 1;
    assert_eq!(steps, 14);
    assert_eq!(state.history.undo_len(), steps);
    assert_eq!(state.polygon_count(), 1);
    assert!(state.document.groups_consistent());

    for expected in documents.iter().rev().skip(1) {
        send(&mut controller, &mut state, AppIntent::UndoRequested);
        assert_eq!(&state.document, expected);
    }
    assert!(!state.can_undo());

    for expected in documents.iter().skip(1) {
        send(&mut controller, &mut state, AppIntent::RedoRequested);
        assert_eq!(&state.document, expected);
    }
    assert!(!state.can_redo());
}

#[test]
fn test_oldest_document_state_is_dropped_past_depth() {
    let mut controller = AppController::new();
    let options = EditorOptions {
        history_max_depth: 20,
        ..EditorOptions::default()
    };
    let mut state = AppState::with_options(options);
    let mut documents = vec![state.document.clone()];

    for i in 0..25 {
        let pos = Vec2::new(i as f32 * 10.0, (i % 3) as f32 * 10.0);
        click_and_record(&mut controller, &mut state, pos, false, &mut documents);
    }
    assert_eq!(documents.len(), 26);

    let mut undone = 0;
    while state.can_undo() {
        send(&mut controller, &mut state, AppIntent::UndoRequested);
        undone += 1;
        assert_eq!(state.document, documents[25 - undone]);
    }

    assert_eq!(undone, 20);
    assert_eq!(state.document.current_polygon.len(), 5);
}
