//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Polygone: {} | Texte: {} | Ecken in Arbeit: {}",
                state.polygon_count(),
                state.text_count(),
                state.document.current_polygon.len()
            ));

            ui.separator();

            ui.label(format!("Zoom: {:.2}x", state.view.camera.zoom));

            if let Some(pointer) = state.view.pointer_position {
                ui.separator();
                ui.label(format!("Zeiger: ({:.1}, {:.1})", pointer.x, pointer.y));
            }

            ui.separator();

            let selected = state.selection.polygons.len() + state.selection.texts.len();
            match state.selection.group {
                Some(group) => ui.label(format!("Selektiert: {} (Gruppe {})", selected, group)),
                None => ui.label(format!("Selektiert: {}", selected)),
            };

            ui.separator();

            ui.label(format!("Modus: {}", state.editor.mode.label()));
            if let Some(drag) = &state.editor.drag {
                ui.label(format!("· Ziehen: {}", drag.kind.label()));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Undo: {} | Redo: {}",
                    state.history.undo_len(),
                    state.history.redo_len()
                ));
            });
        });
    });
}
