use crate::{click, drag, draw_square, select_mode, send};
use approx::assert_abs_diff_eq;
use glam::Vec2;
use shape_annotation_editor::core::EdgePropertyChange;
use shape_annotation_editor::{AppController, AppIntent, AppState, EditMode, PolygonRef};

fn square_with_controller() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_square(&mut controller, &mut state, 0.0, 0.0);
    select_mode(&mut controller, &mut state, EditMode::Edit);
    (controller, state)
}

#[test]
fn test_drag_polygon_is_single_undo_step() {
    let (mut controller, mut state) = square_with_controller();
    let undo_before = state.history.undo_len();

    drag(
        &mut controller,
        &mut state,
        Vec2::new(50.0, 50.0),
        Vec2::new(70.0, 60.0),
    );

    assert_eq!(
        state.document.polygons[0].vertices[0].position,
        Vec2::new(20.0, 10.0)
    );
    assert_eq!(state.history.undo_len(), undo_before + 1);
    assert!(!state.editor.is_dragging());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.document.polygons[0].vertices[0].position, Vec2::ZERO);

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(
        state.document.polygons[0].vertices[0].position,
        Vec2::new(20.0, 10.0)
    );
}

#[test]
fn test_undo_during_drag_discards_gesture() {
    let (mut controller, mut state) = square_with_controller();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(50.0, 50.0),
            additive: false,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(80.0, 80.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(!state.editor.is_dragging());
    // Drag verworfen, danach das Schließen rückgängig gemacht
    assert_eq!(state.polygon_count(), 0);
    assert_eq!(state.document.current_polygon.len(), 4);
    assert_eq!(
        state.document.current_polygon.vertices[0].position,
        Vec2::ZERO
    );

    // Ein verspätetes Pointer-Up erzeugt keinen weiteren Undo-Schritt
    let undo_len = state.history.undo_len();
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(state.history.undo_len(), undo_len);
}

#[test]
fn test_mode_switch_during_drag_commits_gesture() {
    let (mut controller, mut state) = square_with_controller();
    let undo_before = state.history.undo_len();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(50.0, 50.0),
            additive: false,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(60.0, 50.0),
        },
    );
    select_mode(&mut controller, &mut state, EditMode::Draw);

    assert!(!state.editor.is_dragging());
    assert_eq!(state.history.undo_len(), undo_before + 1);
    assert!(state.selection.is_empty());
    assert_eq!(
        state.document.polygons[0].vertices[0].position,
        Vec2::new(10.0, 0.0)
    );
}

#[test]
fn test_click_on_empty_canvas_clears_selection() {
    let (mut controller, mut state) = square_with_controller();
    click(&mut controller, &mut state, 50.0, 50.0);
    assert!(state
        .selection
        .contains_polygon(PolygonRef::Completed(0)));

    click(&mut controller, &mut state, 400.0, 400.0);

    assert!(state.selection.is_empty());
}

#[test]
fn test_delete_mode_removes_newest_polygon_under_pointer() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_square(&mut controller, &mut state, 0.0, 0.0);
    draw_square(&mut controller, &mut state, 50.0, 50.0);
    select_mode(&mut controller, &mut state, EditMode::Delete);

    click(&mut controller, &mut state, 75.0, 75.0);

    assert_eq!(state.polygon_count(), 1);
    assert_eq!(state.document.polygons[0].vertices[0].position, Vec2::ZERO);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.polygon_count(), 2);
}

#[test]
fn test_text_mode_places_text_and_edit_mode_moves_it() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    select_mode(&mut controller, &mut state, EditMode::Text);

    click(&mut controller, &mut state, 300.0, 300.0);

    assert_eq!(state.text_count(), 1);
    assert_eq!(
        state.document.texts[0].content,
        state.options.text_default_content
    );

    select_mode(&mut controller, &mut state, EditMode::Edit);
    drag(
        &mut controller,
        &mut state,
        Vec2::new(300.0, 300.0),
        Vec2::new(320.0, 310.0),
    );

    assert_eq!(state.document.texts[0].position, Vec2::new(320.0, 310.0));
    assert_eq!(state.selection.single_text(), Some(0));
}

#[test]
fn test_group_selection_and_drag_moves_all_members() {
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

    let group = state.selection.group.expect("Gruppe selektiert");
    assert_eq!(state.document.group_member_count(group), 2);

    drag(
        &mut controller,
        &mut state,
        Vec2::new(250.0, 50.0),
        Vec2::new(260.0, 70.0),
    );

    assert_eq!(
        state.document.polygons[0].vertices[0].position,
        Vec2::new(10.0, 20.0)
    );
    assert_eq!(
        state.document.polygons[1].vertices[0].position,
        Vec2::new(210.0, 20.0)
    );

    send(&mut controller, &mut state, AppIntent::UngroupSelectionRequested);
    assert!(state.document.group(group).is_none());
    assert!(state.document.groups_consistent());
}

#[test]
fn test_scale_handle_drag_scales_selected_triangle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for (x, y) in [(0.0, 0.0), (60.0, 0.0), (0.0, 60.0)] {
        click(&mut controller, &mut state, x, y);
    }
    send(&mut controller, &mut state, AppIntent::ClosePolygonRequested);
    select_mode(&mut controller, &mut state, EditMode::Edit);
    click(&mut controller, &mut state, 15.0, 15.0);

    // Griff bei (60, 60), Schwerpunkt (20, 20): doppelte Entfernung = Faktor 2
    drag(
        &mut controller,
        &mut state,
        Vec2::new(60.0, 60.0),
        Vec2::new(100.0, 100.0),
    );

    let vertices = &state.document.polygons[0].vertices;
    assert!((vertices[0].position - Vec2::new(-20.0, -20.0)).length() < 1e-3);
    assert!((vertices[1].position - Vec2::new(100.0, -20.0)).length() < 1e-3);
}

#[test]
fn test_edge_property_change_is_undoable() {
    let (mut controller, mut state) = square_with_controller();
    let before = state.document.polygons[0].vertices[0].edge.curvature;

    send(
        &mut controller,
        &mut state,
        AppIntent::EdgePropertyChanged {
            polygon: PolygonRef::Completed(0),
            edge: 0,
            change: EdgePropertyChange::Curvature(before + 15.0),
        },
    );
    assert_eq!(
        state.document.polygons[0].vertices[0].edge.curvature,
        before + 15.0
    );

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.document.polygons[0].vertices[0].edge.curvature, before);
}

#[test]
fn test_scaling_up_and_back_down_restores_vertices() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    for (x, y) in [(0.0, 0.0), (60.0, 0.0), (0.0, 60.0)] {
        click(&mut controller, &mut state, x, y);
    }
    send(&mut controller, &mut state, AppIntent::ClosePolygonRequested);
    let original: Vec<Vec2> = state.document.polygons[0].positions();
    select_mode(&mut controller, &mut state, EditMode::Edit);
    click(&mut controller, &mut state, 15.0, 15.0);

    // Faktor 2 um den Schwerpunkt (20, 20), danach Faktor 1/2 vom neuen Griff aus
    drag(
        &mut controller,
        &mut state,
        Vec2::new(60.0, 60.0),
        Vec2::new(100.0, 100.0),
    );
    drag(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 100.0),
        Vec2::new(60.0, 60.0),
    );

    let restored = state.document.polygons[0].positions();
    for (after, before) in restored.iter().zip(&original) {
        assert_abs_diff_eq!(after.x, before.x, epsilon = 1e-3);
        assert_abs_diff_eq!(after.y, before.y, epsilon = 1e-3);
    }
}

#[test]
fn test_typing_a_label_in_panel_is_one_undo_step() {
    let (mut controller, mut state) = square_with_controller();
    let undo_before = state.history.undo_len();

    let mut label = String::new();
    for c in "Seite a".chars() {
        label.push(c);
        send(
            &mut controller,
            &mut state,
            AppIntent::EdgePropertyChanged {
                polygon: PolygonRef::Completed(0),
                edge: 0,
                change: EdgePropertyChange::LabelOverride(label.clone()),
            },
        );
    }
    send(&mut controller, &mut state, AppIntent::PropertyEditFinished);
    send(
        &mut controller,
        &mut state,
        AppIntent::EdgePropertyChanged {
            polygon: PolygonRef::Completed(0),
            edge: 0,
            change: EdgePropertyChange::LabelOverride("Seite b".to_string()),
        },
    );

    assert_eq!(state.history.undo_len(), undo_before + 2);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(
        state.document.polygons[0].vertices[0].edge.label_override,
        "Seite a"
    );
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.document.polygons[0].vertices[0].edge.label_override, "");
}
