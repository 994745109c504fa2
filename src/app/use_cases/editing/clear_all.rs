//! Use-Case: Dokument vollständig leeren.

use crate::app::AppState;

/// Leert Polygone, Polygon in Arbeit, Texte und Gruppen in einem Undo-Schritt.
///
/// Ein bereits leeres Dokument erzeugt keinen History-Eintrag.
pub fn clear_all(state: &mut AppState) {
    if state.document == crate::core::Document::new() {
        log::debug!("Alles löschen: Dokument ist bereits leer");
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let polygons = state.document.polygon_count();
    let texts = state.document.text_count();
    state.document.clear();
    state.selection.clear();
    state.view.pointer_position = None;

    log::info!("Dokument geleert ({} Polygone, {} Texte)", polygons, texts);
}
