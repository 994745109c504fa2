//! Integrationstests für den Intent → Command → Use-Case-Fluss über den `AppController`.

use glam::Vec2;
use shape_annotation_editor::{AppController, AppIntent, AppState, EditMode};

mod controller_flow {
    mod drawing;
    mod editing;
    mod history;
}

/// Schickt einen Intent durch den Controller und erwartet Erfolg.
pub(crate) fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent.clone())
        .unwrap_or_else(|e| panic!("{intent:?} sollte funktionieren: {e:#}"));
}

/// Klick (Down + Up) an einer Geräteposition.
pub(crate) fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(x, y),
            additive: false,
        },
    );
    send(controller, state, AppIntent::PointerReleased);
}

/// Drag von `from` nach `to` mit einem Zwischenschritt.
pub(crate) fn drag(controller: &mut AppController, state: &mut AppState, from: Vec2, to: Vec2) {
    send(
        controller,
        state,
        AppIntent::PointerPressed {
            screen_pos: from,
            additive: false,
        },
    );
    send(
        controller,
        state,
        AppIntent::PointerMoved {
            screen_pos: (from + to) * 0.5,
        },
    );
    send(controller, state, AppIntent::PointerMoved { screen_pos: to });
    send(controller, state, AppIntent::PointerReleased);
}

pub(crate) fn select_mode(controller: &mut AppController, state: &mut AppState, mode: EditMode) {
    send(controller, state, AppIntent::ModeSelected { mode });
}

/// Zeichnet ein Quadrat mit Kantenlänge 100 bei (x, y) und schließt es.
pub(crate) fn draw_square(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    select_mode(controller, state, EditMode::Draw);
    for (dx, dy) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)] {
        click(controller, state, x + dx, y + dy);
    }
    send(controller, state, AppIntent::ClosePolygonRequested);
}
