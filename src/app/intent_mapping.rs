//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Gerätekoordinaten werden hier in Modellkoordinaten umgerechnet und bei
//! aktivem Raster-Einrasten auf das Gitter gelegt.

use super::{AppCommand, AppIntent, AppState};
use crate::core::snap_to_grid;

/// Rechnet eine Geräteposition in eine (ggf. eingerastete) Modellposition um.
fn world_position(state: &AppState, screen_pos: glam::Vec2) -> glam::Vec2 {
    let world = state.view.camera.screen_to_world(screen_pos);
    if state.view.snap_to_grid {
        snap_to_grid(world, state.options.grid_size)
    } else {
        world
    }
}

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            screen_pos,
            additive,
        } => vec![AppCommand::BeginPointerGesture {
            world_pos: world_position(state, screen_pos),
            additive,
        }],
        AppIntent::PointerMoved { screen_pos } => vec![AppCommand::UpdatePointerGesture {
            world_pos: world_position(state, screen_pos),
        }],
        AppIntent::PointerReleased => vec![AppCommand::EndPointerGesture],
        AppIntent::ZoomStepRequested { zoom_in } => {
            let step = state.options.camera_scroll_zoom_step;
            let factor = if zoom_in { step } else { 1.0 / step };
            vec![AppCommand::ZoomCamera { factor }]
        }
        AppIntent::CanvasOriginChanged { origin } => vec![AppCommand::SetCanvasOrigin { origin }],

        AppIntent::ModeSelected { mode } => vec![AppCommand::SetEditMode { mode }],
        AppIntent::ClosePolygonRequested => vec![AppCommand::ClosePolygon],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearAll],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::GroupSelectionRequested => vec![AppCommand::GroupSelection],
        AppIntent::UngroupSelectionRequested => vec![AppCommand::UngroupSelection],
        AppIntent::DuplicateSelectionRequested => vec![AppCommand::DuplicateSelection],

        AppIntent::EdgePropertyChanged {
            polygon,
            edge,
            change,
        } => vec![AppCommand::SetEdgeProperty {
            polygon,
            edge,
            change,
        }],
        AppIntent::AnglePropertyChanged {
            polygon,
            vertex,
            change,
        } => vec![AppCommand::SetAngleProperty {
            polygon,
            vertex,
            change,
        }],
        AppIntent::TextPropertyChanged { text, change } => {
            vec![AppCommand::SetTextProperty { text, change }]
        }
        AppIntent::PropertyEditFinished => vec![AppCommand::FinishPropertyEdit],

        AppIntent::ShowGridToggled { enabled } => vec![AppCommand::SetShowGrid { enabled }],
        AppIntent::SnapToGridToggled { enabled } => vec![AppCommand::SetSnapToGrid { enabled }],
        AppIntent::ShowEdgeLengthsToggled { enabled } => {
            vec![AppCommand::SetShowEdgeLengths { enabled }]
        }
        AppIntent::ShowAnglesToggled { enabled } => vec![AppCommand::SetShowAngles { enabled }],
    }
}

#[cfg(test)]
mod tests;
