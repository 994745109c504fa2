//! Use-Case: Selektierte Polygone und Texte duplizieren.

use crate::app::AppState;
use crate::core::PolygonRef;

/// Kopiert alle selektierten abgeschlossenen Polygone und Texte ans Ende.
///
/// Kopien sind ungruppiert und liegen deckungsgleich über dem Original.
/// Die Selektion bleibt unverändert. Gibt die Anzahl der Kopien zurück.
pub fn duplicate_selection(state: &mut AppState) -> usize {
    let polygons: Vec<usize> = state
        .selection
        .polygons
        .iter()
        .filter_map(|p| match *p {
            PolygonRef::Completed(i) if i < state.document.polygons.len() => Some(i),
            _ => None,
        })
        .collect();
    let texts: Vec<usize> = state
        .selection
        .texts
        .iter()
        .copied()
        .filter(|&i| i < state.document.texts.len())
        .collect();

    if polygons.is_empty() && texts.is_empty() {
        log::debug!("Duplizieren: keine abgeschlossenen Polygone oder Texte selektiert");
        return 0;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let mut copies = 0;
    for index in polygons {
        if state
            .document
            .duplicate_polygon(PolygonRef::Completed(index))
            .is_some()
        {
            copies += 1;
        }
    }
    for index in texts {
        if state.document.duplicate_text(index).is_some() {
            copies += 1;
        }
    }

    log::info!("{} Objekte dupliziert", copies);
    copies
}
