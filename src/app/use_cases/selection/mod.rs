//! Use-Case-Funktionen für Selektion und Drag-Gesten im Edit-Modus.
//!
//! Aufgeteilt nach Aufgabe:
//! - `pick` — Hit-Test, Selektion und Drag-Start bei Pointer-Down
//! - `drag` — Drag fortschreiben und bei Pointer-Up committen
//! - `grouping` — Gruppieren und Auflösen
//! - `helpers` — Gemeinsame Hilfsfunktionen

mod drag;
mod grouping;
mod helpers;
mod pick;

pub use drag::{end_drag, update_drag};
pub use grouping::{group_selection, ungroup_selection};
pub use helpers::clear_selection;
pub use pick::begin_edit_gesture;
