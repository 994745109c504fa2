//! Use-Case: Polygon in Arbeit schließen.

use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::{Document, EditError, PolygonRef};

/// Schließt das Polygon in Arbeit und übernimmt es in die abgeschlossenen Polygone.
///
/// Bei weniger als 3 Ecken: `EditError`, kein Snapshot, keine Änderung.
/// Eine Selektion des Polygons in Arbeit wandert auf den neuen Index.
pub fn close_polygon(state: &mut AppState) -> Result<usize, EditError> {
    let count = state.document.current_polygon.len();
    if count < Document::MIN_CLOSE_VERTICES {
        log::warn!(
            "Polygon schließen abgelehnt: {} Ecken (mindestens {})",
            count,
            Document::MIN_CLOSE_VERTICES
        );
        return Err(EditError::ClosePolygonTooFewVertices { count });
    }

    let before = state.document.clone();
    let index = state.document.close_current_polygon()?;
    state.history.record_snapshot(Snapshot { document: before });

    if state.selection.polygons.shift_remove(&PolygonRef::InProgress) {
        state.selection.polygons.insert(PolygonRef::Completed(index));
    }
    state.view.pointer_position = None;

    log::info!("Polygon {} geschlossen ({} Ecken)", index, count);
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vertex;
    use glam::Vec2;

    fn state_with_vertices(count: usize) -> AppState {
        let mut state = AppState::new();
        for i in 0..count {
            state
                .document
                .push_vertex(Vertex::new(Vec2::new(i as f32 * 10.0, (i % 2) as f32 * 10.0)));
        }
        state
    }

    #[test]
    fn two_vertices_are_rejected_without_commit() {
        let mut state = state_with_vertices(2);
        let before = state.document.clone();

        let result = close_polygon(&mut state);

        assert_eq!(result, Err(EditError::ClosePolygonTooFewVertices { count: 2 }));
        assert_eq!(state.document, before);
        assert!(!state.can_undo());
    }

    #[test]
    fn three_vertices_close_and_move_selection() {
        let mut state = state_with_vertices(3);
        state.selection.select_polygon(PolygonRef::InProgress, false);

        let index = close_polygon(&mut state).expect("Polygon geschlossen");

        assert_eq!(index, 0);
        assert!(state.document.polygons[0].is_closed);
        assert!(state.document.current_polygon.is_empty());
        assert!(state.selection.contains_polygon(PolygonRef::Completed(0)));
        assert!(!state.selection.contains_polygon(PolygonRef::InProgress));
        assert!(state.can_undo());
    }
}
