//! Handler für Pointer-Gesten: Down, Move und Up je nach Modus.

use crate::app::use_cases;
use crate::app::{AppState, EditMode};

/// Pointer-Down: verteilt an den Use-Case des aktiven Modus.
pub fn begin_gesture(state: &mut AppState, world_pos: glam::Vec2, additive: bool) {
    // Ein verwaister Drag (Pointer-Up außerhalb des Canvas) wird zuerst abgeschlossen
    if state.editor.is_dragging() {
        use_cases::selection::end_drag(state);
    }
    state.view.pointer_position = None;
    use_cases::editing::finish_property_edit(state);

    match state.editor.mode {
        EditMode::Draw => use_cases::editing::append_vertex(state, world_pos),
        EditMode::Edit => {
            use_cases::selection::begin_edit_gesture(state, world_pos, additive);
        }
        EditMode::Delete => {
            use_cases::editing::delete_topmost_at(state, world_pos);
        }
        EditMode::Text => {
            use_cases::editing::add_text_at(state, world_pos);
        }
    }
}

/// Pointer-Move: schreibt den laufenden Drag fort, sonst nur die Zeigerposition.
pub fn update_gesture(state: &mut AppState, world_pos: glam::Vec2) {
    if state.editor.is_dragging() {
        use_cases::selection::update_drag(state, world_pos);
    } else {
        state.view.pointer_position = Some(world_pos);
    }
}

/// Pointer-Up: beendet den laufenden Drag.
pub fn end_gesture(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}
