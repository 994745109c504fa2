//! Toolbar für Moduswahl, Dokument-Aktionen und Anzeige-Schalter.

use crate::app::{AppIntent, AppState, EditMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.label("Modus:");
            for (index, mode) in EditMode::ALL.into_iter().enumerate() {
                let label = format!("{} ({})", mode.label(), index + 1);
                if ui
                    .add(egui::Button::new(label).selected(active == mode))
                    .clicked()
                {
                    events.push(AppIntent::ModeSelected { mode });
                }
            }

            ui.separator();

            let can_close =
                state.document.current_polygon.len() >= crate::core::Document::MIN_CLOSE_VERTICES;
            if ui
                .add_enabled(can_close, egui::Button::new("⬠ Schließen (Enter)"))
                .clicked()
            {
                events.push(AppIntent::ClosePolygonRequested);
            }

            let has_selection = !state.selection.is_empty();
            if ui
                .add_enabled(has_selection, egui::Button::new("Gruppieren"))
                .clicked()
            {
                events.push(AppIntent::GroupSelectionRequested);
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("Auflösen"))
                .clicked()
            {
                events.push(AppIntent::UngroupSelectionRequested);
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("Duplizieren"))
                .clicked()
            {
                events.push(AppIntent::DuplicateSelectionRequested);
            }

            ui.separator();

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("↶ Undo"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.can_redo(), egui::Button::new("↷ Redo"))
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }
            if ui.button("🗑 Alles löschen").clicked() {
                events.push(AppIntent::ClearAllRequested);
            }

            ui.separator();

            let mut show_grid = state.view.show_grid;
            if ui.checkbox(&mut show_grid, "Raster").changed() {
                events.push(AppIntent::ShowGridToggled { enabled: show_grid });
            }
            let mut snap = state.view.snap_to_grid;
            if ui.checkbox(&mut snap, "Einrasten").changed() {
                events.push(AppIntent::SnapToGridToggled { enabled: snap });
            }
            let mut lengths = state.view.show_edge_lengths;
            if ui.checkbox(&mut lengths, "Längen").changed() {
                events.push(AppIntent::ShowEdgeLengthsToggled { enabled: lengths });
            }
            let mut angles = state.view.show_angles;
            if ui.checkbox(&mut angles, "Winkel").changed() {
                events.push(AppIntent::ShowAnglesToggled { enabled: angles });
            }
        });
    });

    events
}
