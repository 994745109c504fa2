//! Use-Case: Selektion gruppieren und Gruppen auflösen.

use super::helpers::selected_completed_polygons;
use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::GroupId;

/// Fasst selektierte abgeschlossene Polygone und Texte zu einer Gruppe zusammen.
///
/// Abgelehnt (ohne Undo-Schritt) bei weniger als 2 Mitgliedern oder wenn ein
/// Mitglied bereits gruppiert ist.
pub fn group_selection(state: &mut AppState) -> Option<GroupId> {
    let polygons = selected_completed_polygons(state);
    let texts: Vec<usize> = state.selection.texts.iter().copied().collect();

    let before = Snapshot::from_state(state);
    let Some(id) = state.document.create_group(&polygons, &texts) else {
        log::warn!(
            "Gruppieren abgelehnt: {} Polygone, {} Texte (mind. 2 ungruppierte Objekte nötig)",
            polygons.len(),
            texts.len()
        );
        return None;
    };

    state.history.record_snapshot(before);
    state.selection.group = Some(id);
    log::info!(
        "Gruppe {} erstellt ({} Polygone, {} Texte)",
        id,
        polygons.len(),
        texts.len()
    );
    Some(id)
}

/// Löst die selektierte Gruppe auf.
///
/// Ohne explizit selektierte Gruppe gilt die Gruppe des ersten gruppierten
/// Mitglieds der Selektion.
pub fn ungroup_selection(state: &mut AppState) -> bool {
    let Some(id) = selected_group(state) else {
        log::debug!("Auflösen: keine Gruppe in der Selektion");
        return false;
    };

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    state.document.dissolve_group(id);
    state.selection.group = None;
    log::info!("Gruppe {} aufgelöst", id);
    true
}

/// Explizit selektierte lebende Gruppe, sonst die Gruppe des ersten gruppierten Mitglieds.
fn selected_group(state: &AppState) -> Option<GroupId> {
    let document = &state.document;
    if let Some(id) = state.selection.group.filter(|&id| document.group(id).is_some()) {
        return Some(id);
    }
    selected_completed_polygons(state)
        .into_iter()
        .find_map(|i| document.polygons.get(i).and_then(|p| p.group_id))
        .or_else(|| {
            state
                .selection
                .texts
                .iter()
                .find_map(|&i| document.texts.get(i).and_then(|t| t.group_id))
        })
}
