//! Use-Case-Funktionen für Dokument-Änderungen.
//!
//! Aufgeteilt nach Operation:
//! - `add_vertex` — Ecke an das Polygon in Arbeit anhängen
//! - `close_polygon` — Polygon in Arbeit schließen
//! - `add_text` — Text platzieren
//! - `delete_at` — Oberstes Objekt unter dem Zeiger löschen
//! - `duplicate` — Selektion duplizieren
//! - `clear_all` — Dokument leeren
//! - `properties` — Kanten-, Winkel- und Text-Eigenschaften

mod add_text;
mod add_vertex;
mod clear_all;
mod close_polygon;
mod delete_at;
mod duplicate;
mod properties;

pub use add_text::add_text_at;
pub use add_vertex::append_vertex;
pub use clear_all::clear_all;
pub use close_polygon::close_polygon;
pub use delete_at::{delete_topmost_at, DeletedObject};
pub use duplicate::duplicate_selection;
pub use properties::{
    finish_property_edit, set_angle_property, set_edge_property, set_text_property,
};
