use crate::app::{AppCommand, AppIntent, AppState, EditMode};
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn pointer_press_is_converted_to_world_coordinates() {
    let mut state = AppState::new();
    state.view.camera.canvas_origin = Vec2::new(100.0, 50.0);
    state.view.camera.zoom = 2.0;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(140.0, 90.0),
            additive: true,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::BeginPointerGesture {
            world_pos: Vec2::new(20.0, 20.0),
            additive: true,
        }]
    );
}

#[test]
fn pointer_move_snaps_to_grid_when_enabled() {
    let mut state = AppState::new();
    state.view.snap_to_grid = true;
    state.options.grid_size = 20.0;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(29.0, 11.0),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::UpdatePointerGesture {
            world_pos: Vec2::new(20.0, 20.0),
        }]
    );
}

#[test]
fn zoom_steps_use_configured_factor() {
    let state = AppState::new();
    let step = state.options.camera_scroll_zoom_step;

    let zoom_in = map_intent_to_commands(&state, AppIntent::ZoomStepRequested { zoom_in: true });
    let zoom_out = map_intent_to_commands(&state, AppIntent::ZoomStepRequested { zoom_in: false });

    assert_eq!(zoom_in, vec![AppCommand::ZoomCamera { factor: step }]);
    assert_eq!(
        zoom_out,
        vec![AppCommand::ZoomCamera {
            factor: 1.0 / step
        }]
    );
}

#[test]
fn mode_selected_maps_to_set_edit_mode() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ModeSelected {
            mode: EditMode::Delete,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::SetEditMode {
            mode: EditMode::Delete
        }]
    );
}

#[test]
fn undo_redo_map_one_to_one() {
    let state = AppState::new();

    assert_eq!(
        map_intent_to_commands(&state, AppIntent::UndoRequested),
        vec![AppCommand::Undo]
    );
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::RedoRequested),
        vec![AppCommand::Redo]
    );
}

#[test]
fn finished_property_edit_maps_to_single_command() {
    let state = AppState::new();

    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PropertyEditFinished),
        vec![AppCommand::FinishPropertyEdit]
    );
}
