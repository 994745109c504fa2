//! Use-Case: Ecke an das Polygon in Arbeit anhängen (Draw-Modus).

use crate::app::AppState;
use crate::core::Vertex;

/// Hängt eine Ecke mit den Standard-Eigenschaften aus den Optionen an.
///
/// Das Gummiband wird zurückgesetzt, bis der nächste Pointer-Move eintrifft.
pub fn append_vertex(state: &mut AppState, world_pos: glam::Vec2) {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let vertex = Vertex::with_properties(
        world_pos,
        state.options.default_edge.clone(),
        state.options.default_angle.clone(),
    );
    state.document.push_vertex(vertex);
    state.view.pointer_position = None;

    log::info!(
        "Ecke {} hinzugefügt bei ({:.1}, {:.1})",
        state.document.current_polygon.len(),
        world_pos.x,
        world_pos.y
    );
}
