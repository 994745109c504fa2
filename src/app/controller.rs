//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Diskrete Dokument-Commands schließen einen laufenden Drag vorher ab,
    /// damit jede Änderung ihren eigenen Undo-Schritt bekommt. Undo/Redo
    /// verwerfen den Drag stattdessen.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        if finishes_active_drag(&command) && state.editor.is_dragging() {
            handlers::pointer::end_gesture(state);
        }

        match command {
            // === Pointer-Gesten ===
            AppCommand::BeginPointerGesture {
                world_pos,
                additive,
            } => handlers::pointer::begin_gesture(state, world_pos, additive),
            AppCommand::UpdatePointerGesture { world_pos } => {
                handlers::pointer::update_gesture(state, world_pos)
            }
            AppCommand::EndPointerGesture => handlers::pointer::end_gesture(state),

            // === Kamera ===
            AppCommand::ZoomCamera { factor } => handlers::view::zoom(state, factor),
            AppCommand::SetCanvasOrigin { origin } => {
                handlers::view::set_canvas_origin(state, origin)
            }

            // === Editing ===
            AppCommand::SetEditMode { mode } => handlers::editing::set_edit_mode(state, mode),
            AppCommand::ClosePolygon => handlers::editing::close_polygon(state)?,
            AppCommand::ClearAll => handlers::editing::clear_all(state),
            AppCommand::DuplicateSelection => handlers::editing::duplicate_selection(state),
            AppCommand::SetEdgeProperty {
                polygon,
                edge,
                change,
            } => handlers::editing::set_edge_property(state, polygon, edge, change),
            AppCommand::SetAngleProperty {
                polygon,
                vertex,
                change,
            } => handlers::editing::set_angle_property(state, polygon, vertex, change),
            AppCommand::SetTextProperty { text, change } => {
                handlers::editing::set_text_property(state, text, change)
            }
            AppCommand::FinishPropertyEdit => handlers::editing::finish_property_edit(state),

            // === Gruppen ===
            AppCommand::GroupSelection => handlers::selection::group_selection(state),
            AppCommand::UngroupSelection => handlers::selection::ungroup_selection(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Anzeige ===
            AppCommand::SetShowGrid { enabled } => handlers::view::set_show_grid(state, enabled),
            AppCommand::SetSnapToGrid { enabled } => {
                handlers::view::set_snap_to_grid(state, enabled)
            }
            AppCommand::SetShowEdgeLengths { enabled } => {
                handlers::view::set_show_edge_lengths(state, enabled)
            }
            AppCommand::SetShowAngles { enabled } => {
                handlers::view::set_show_angles(state, enabled)
            }
        }

        state.view.request_redraw();
        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}

/// Commands, vor denen ein laufender Drag committet wird.
fn finishes_active_drag(command: &AppCommand) -> bool {
    matches!(
        command,
        AppCommand::ClosePolygon
            | AppCommand::ClearAll
            | AppCommand::GroupSelection
            | AppCommand::UngroupSelection
            | AppCommand::DuplicateSelection
            | AppCommand::SetEdgeProperty { .. }
            | AppCommand::SetAngleProperty { .. }
            | AppCommand::SetTextProperty { .. }
    )
}
