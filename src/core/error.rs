//! Fehler, die synchron an den Aufrufer gemeldet werden.

use thiserror::Error;

/// Abgelehnte Benutzereingaben. Der Zustand bleibt unverändert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Schließen eines Polygons mit weniger als 3 Ecken
    #[error("Polygon kann nicht geschlossen werden: {count} Ecken, mindestens 3 erforderlich")]
    ClosePolygonTooFewVertices { count: usize },
}
