use crate::{click, draw_square, send};
use glam::Vec2;
use shape_annotation_editor::{AppCommand, AppController, AppIntent, AppState, EditError};

#[test]
fn test_draw_and_close_triangle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 100.0, 0.0);
    click(&mut controller, &mut state, 0.0, 100.0);
    assert_eq!(state.document.current_polygon.len(), 3);

    send(&mut controller, &mut state, AppIntent::ClosePolygonRequested);

    assert_eq!(state.polygon_count(), 1);
    assert!(state.document.polygons[0].is_closed);
    assert!(state.document.current_polygon.is_empty());
    // Drei Ecken + Schließen = vier Undo-Schritte
    assert_eq!(state.history.undo_len(), 4);
}

#[test]
fn test_close_with_two_vertices_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 50.0, 0.0);
    let undo_before = state.history.undo_len();

    let result = controller.handle_intent(&mut state, AppIntent::ClosePolygonRequested);

    let err = result.expect_err("Schließen mit 2 Ecken muss fehlschlagen");
    assert_eq!(
        err.downcast_ref::<EditError>(),
        Some(&EditError::ClosePolygonTooFewVertices { count: 2 })
    );
    assert_eq!(state.document.current_polygon.len(), 2);
    assert_eq!(state.polygon_count(), 0);
    assert_eq!(state.history.undo_len(), undo_before);
}

#[test]
fn test_pointer_positions_use_camera_transform() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    send(
        &mut controller,
        &mut state,
        AppIntent::CanvasOriginChanged {
            origin: Vec2::new(100.0, 40.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ZoomStepRequested { zoom_in: true },
    );
    let zoom = state.view.camera.zoom;

    click(&mut controller, &mut state, 100.0 + 55.0 * zoom, 40.0 + 22.0 * zoom);

    let position = state.document.current_polygon.vertices[0].position;
    assert!((position - Vec2::new(55.0, 22.0)).length() < 1e-3);
}

#[test]
fn test_snap_to_grid_applies_to_new_vertices() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    send(
        &mut controller,
        &mut state,
        AppIntent::SnapToGridToggled { enabled: true },
    );

    click(&mut controller, &mut state, 27.0, 52.0);

    assert_eq!(
        state.document.current_polygon.vertices[0].position,
        Vec2::new(20.0, 60.0)
    );
}

#[test]
fn test_rubber_band_follows_pointer_after_vertex() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 10.0, 10.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(80.0, 30.0),
        },
    );

    let scene = controller.build_render_scene(&state);
    assert_eq!(
        scene.rubber_band,
        Some((Vec2::new(10.0, 10.0), Vec2::new(80.0, 30.0)))
    );
}

#[test]
fn test_pointer_moves_are_not_logged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    draw_square(&mut controller, &mut state, 0.0, 0.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(500.0, 500.0),
        },
    );

    assert!(!state
        .command_log
        .entries()
        .iter()
        .any(|c| matches!(c, AppCommand::UpdatePointerGesture { .. })));
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::ClosePolygon)
    ));
}
