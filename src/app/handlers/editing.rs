//! Handler für Modus-Wechsel und Dokument-Änderungen.

use crate::app::use_cases;
use crate::app::{AppState, EditMode};
use crate::core::{
    AnglePropertyChange, EditError, EdgePropertyChange, PolygonRef, TextPropertyChange,
};

/// Wechselt den Bearbeitungsmodus.
///
/// Draw und Text heben die Selektion auf; ein laufender Drag wird vorher abgeschlossen.
pub fn set_edit_mode(state: &mut AppState, mode: EditMode) {
    use_cases::selection::end_drag(state);
    state.editor.mode = mode;
    if matches!(mode, EditMode::Draw | EditMode::Text) {
        use_cases::selection::clear_selection(state);
    }
    log::info!("Modus: {}", mode.label());
}

/// Schließt das Polygon in Arbeit und propagiert Ablehnungen an den Aufrufer.
pub fn close_polygon(state: &mut AppState) -> Result<(), EditError> {
    use_cases::editing::close_polygon(state).map(|_| ())
}

/// Leert das Dokument.
pub fn clear_all(state: &mut AppState) {
    use_cases::editing::clear_all(state);
}

/// Dupliziert die Selektion.
pub fn duplicate_selection(state: &mut AppState) {
    use_cases::editing::duplicate_selection(state);
}

/// Ändert eine Kanten-Eigenschaft.
pub fn set_edge_property(
    state: &mut AppState,
    polygon: PolygonRef,
    edge: usize,
    change: EdgePropertyChange,
) {
    use_cases::editing::set_edge_property(state, polygon, edge, change);
}

/// Ändert eine Winkel-Eigenschaft.
pub fn set_angle_property(
    state: &mut AppState,
    polygon: PolygonRef,
    vertex: usize,
    change: AnglePropertyChange,
) {
    use_cases::editing::set_angle_property(state, polygon, vertex, change);
}

/// Ändert eine Text-Eigenschaft.
pub fn set_text_property(state: &mut AppState, text: usize, change: TextPropertyChange) {
    use_cases::editing::set_text_property(state, text, change);
}

/// Schließt die laufende Feld-Bearbeitung im Panel ab.
pub fn finish_property_edit(state: &mut AppState) {
    use_cases::editing::finish_property_edit(state);
}
