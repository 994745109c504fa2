//! Use-Case: Oberstes Objekt unter dem Zeiger löschen (Delete-Modus).

use crate::app::AppState;
use crate::core::{topmost_polygon_at, topmost_text_at};

/// Was beim Löschen entfernt wurde
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletedObject {
    Polygon(usize),
    Text(usize),
}

/// Löscht das zuletzt erstellte abgeschlossene Polygon unter `world_pos`,
/// sonst den zuletzt erstellten Text.
///
/// Gruppen werden beim Suchen nicht bevorzugt; das Entfernen bleibt
/// gruppenkonsistent (zu kleine Gruppen lösen sich auf).
pub fn delete_topmost_at(state: &mut AppState, world_pos: glam::Vec2) -> Option<DeletedObject> {
    let target = match topmost_polygon_at(&state.document, world_pos) {
        Some(index) => DeletedObject::Polygon(index),
        None => DeletedObject::Text(topmost_text_at(
            &state.document,
            world_pos,
            state.text_measure.as_ref(),
            false,
        )?),
    };

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    match target {
        DeletedObject::Polygon(index) => {
            state.document.remove_polygon(index);
            state.selection.forget_polygon(index);
            log::info!("Polygon {} gelöscht", index);
        }
        DeletedObject::Text(index) => {
            state.document.remove_text(index);
            state.selection.forget_text(index);
            log::info!("Text {} gelöscht", index);
        }
    }
    state.selection.prune(&state.document);

    Some(target)
}
