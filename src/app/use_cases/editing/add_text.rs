//! Use-Case: Neuen Text platzieren (Text-Modus).

use crate::app::AppState;
use crate::core::TextObject;

/// Platziert einen Text mit Standard-Inhalt, -Größe und -Farbe aus den Optionen.
pub fn add_text_at(state: &mut AppState, world_pos: glam::Vec2) -> usize {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let text = TextObject::new(
        world_pos,
        state.options.text_default_content.clone(),
        state.options.text_default_font_size,
        state.options.text_default_color,
    );
    let index = state.document.push_text(text);

    log::info!(
        "Text {} platziert bei ({:.1}, {:.1})",
        index,
        world_pos.x,
        world_pos.y
    );
    index
}
