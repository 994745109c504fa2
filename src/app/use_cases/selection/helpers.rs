//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::AppState;
use crate::core::PolygonRef;

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// Indizes aller selektierten abgeschlossenen Polygone (Auswahlreihenfolge).
pub(super) fn selected_completed_polygons(state: &AppState) -> Vec<usize> {
    state
        .selection
        .polygons
        .iter()
        .filter_map(|p| match *p {
            PolygonRef::Completed(i) => Some(i),
            PolygonRef::InProgress => None,
        })
        .collect()
}
