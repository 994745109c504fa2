//! Use-Case: Laufende Drag-Geste fortschreiben und abschließen.
//!
//! Jeder Move rechnet vom Startzustand der Geste aus, damit sich Rundungsfehler
//! nicht über viele Pointer-Moves aufsummieren.

use crate::app::{AppState, DragState};
use glam::Vec2;

/// Wendet die aktuelle Zeigerposition auf den laufenden Drag an.
///
/// Gibt `true` zurück, wenn das Dokument verändert wurde.
pub fn update_drag(state: &mut AppState, world_pos: Vec2) -> bool {
    let Some(drag) = state.editor.drag.as_mut() else {
        return false;
    };
    let document = &mut state.document;
    let delta = world_pos - drag.start_pointer;

    let changed = match &drag.kind {
        DragState::EdgeControl { polygon, edge } => document
            .polygon_mut(*polygon)
            .filter(|p| *edge < p.edge_count())
            .and_then(|p| p.vertices.get_mut(*edge))
            .map(|v| v.edge_control = Some(world_pos))
            .is_some(),
        DragState::Vertex { polygon, vertex } => document
            .polygon_mut(*polygon)
            .and_then(|p| p.vertices.get_mut(*vertex))
            .map(|v| v.position = world_pos)
            .is_some(),
        DragState::WholePolygon { polygon, start } => document
            .polygons
            .get_mut(*polygon)
            .map(|p| p.apply_pose(start, |pos| pos + delta))
            .is_some(),
        DragState::Group {
            polygons, texts, ..
        } => {
            for (index, start) in polygons {
                if let Some(polygon) = document.polygons.get_mut(*index) {
                    polygon.apply_pose(start, |pos| pos + delta);
                }
            }
            for (index, start) in texts {
                if let Some(text) = document.texts.get_mut(*index) {
                    text.position = *start + delta;
                }
            }
            true
        }
        DragState::Scale {
            polygon,
            start,
            centroid,
            initial_distance,
        } => {
            if *initial_distance <= f32::EPSILON {
                false
            } else {
                let factor = world_pos.distance(*centroid) / initial_distance;
                let centroid = *centroid;
                document
                    .polygon_mut(*polygon)
                    .map(|p| p.apply_pose(start, |pos| centroid + (pos - centroid) * factor))
                    .is_some()
            }
        }
        DragState::Text { text, start } => document
            .texts
            .get_mut(*text)
            .map(|t| t.position = *start + delta)
            .is_some(),
    };

    if changed {
        drag.dirty = true;
    }
    changed
}

/// Beendet den laufenden Drag.
///
/// Hat die Geste das Dokument verändert, wird der Zustand vor Pointer-Down
/// als ein einziger Undo-Schritt committet. Gibt `true` zurück, wenn
/// ein History-Eintrag entstanden ist.
pub fn end_drag(state: &mut AppState) -> bool {
    let Some(drag) = state.editor.drag.take() else {
        return false;
    };

    if !drag.dirty || drag.pending_snapshot.document == state.document {
        log::debug!("Drag beendet ohne Änderung: {}", drag.kind.label());
        return false;
    }

    log::info!("Drag abgeschlossen: {}", drag.kind.label());
    state.history.record_snapshot(drag.pending_snapshot);
    true
}
