//! Use-Case: Pointer-Down im Edit-Modus (Hit-Test, Selektion, Drag-Start).

use crate::app::history::Snapshot;
use crate::app::{ActiveDrag, AppState, DragState};
use crate::core::{hit_test, Hit, PolygonRef};

/// Wertet einen Klick im Edit-Modus aus.
///
/// Selektiert das getroffene Objekt (mit `additive` zusätzlich) und startet
/// den passenden Drag. Ohne Treffer wird die Selektion aufgehoben, außer
/// bei `additive`. Gibt `true` zurück, wenn ein Drag gestartet wurde.
pub fn begin_edit_gesture(state: &mut AppState, world_pos: glam::Vec2, additive: bool) -> bool {
    let hit = {
        let selection = &state.selection;
        hit_test(
            &state.document,
            world_pos,
            |r| selection.contains_polygon(r),
            state.text_measure.as_ref(),
            state.hit_test_params(),
        )
    };

    let Some(hit) = hit else {
        if !additive {
            state.selection.clear();
        }
        log::debug!(
            "Kein Treffer bei ({:.1}, {:.1})",
            world_pos.x,
            world_pos.y
        );
        return false;
    };

    let Some(kind) = select_and_describe(state, hit, additive) else {
        return false;
    };

    log::debug!("Drag gestartet: {}", kind.label());
    let pending_snapshot = Snapshot::from_state(state);
    state.editor.drag = Some(ActiveDrag {
        kind,
        start_pointer: world_pos,
        pending_snapshot,
        dirty: false,
    });
    true
}

/// Passt die Selektion an den Treffer an und liefert den Drag-Zustand.
fn select_and_describe(state: &mut AppState, hit: Hit, additive: bool) -> Option<DragState> {
    match hit {
        Hit::EdgeControl { polygon, edge } => {
            select_polygon_if_new(state, polygon, additive);
            Some(DragState::EdgeControl { polygon, edge })
        }
        Hit::Vertex { polygon, vertex } => {
            select_polygon_if_new(state, polygon, additive);
            Some(DragState::Vertex { polygon, vertex })
        }
        Hit::Group(group) => {
            let members = state.document.group(group)?.clone();
            state.selection.select_group(group, &members, additive);
            let polygons = members
                .polygons
                .iter()
                .filter_map(|&i| state.document.polygons.get(i).map(|p| (i, p.pose())))
                .collect();
            let texts = members
                .texts
                .iter()
                .filter_map(|&i| state.document.texts.get(i).map(|t| (i, t.position)))
                .collect();
            Some(DragState::Group {
                group,
                polygons,
                texts,
            })
        }
        Hit::ScaleHandle { polygon, handle } => {
            let start = state.document.polygon(polygon)?.pose();
            Some(DragState::Scale {
                polygon,
                start,
                centroid: handle.centroid,
                initial_distance: handle.anchor.distance(handle.centroid),
            })
        }
        Hit::Polygon(index) => {
            let start = state.document.polygons.get(index)?.pose();
            state
                .selection
                .select_polygon(PolygonRef::Completed(index), additive);
            Some(DragState::WholePolygon {
                polygon: index,
                start,
            })
        }
        Hit::Text(text) => {
            let start = state.document.texts.get(text)?.position;
            state.selection.select_text(text, additive);
            Some(DragState::Text { text, start })
        }
    }
}

/// Ein bereits selektiertes Polygon behält die übrige Selektion.
fn select_polygon_if_new(state: &mut AppState, polygon: PolygonRef, additive: bool) {
    if !state.selection.contains_polygon(polygon) {
        state.selection.select_polygon(polygon, additive);
    }
}
